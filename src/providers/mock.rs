// src/providers/mock.rs

use serde_json::Value;

use crate::errors::Result;
use crate::generator::INGREDIENTS_LABEL;
use crate::models::{Ingredient, Recipe};
use crate::providers::LlmProvider;

/// Deterministic stand-in for a real model. Picks one of two fixed recipes
/// depending on whether the requested ingredients mention chicken.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl LlmProvider for MockProvider {
    async fn generate(&self, prompt: &str, _schema: &Value) -> Result<String> {
        let preview: String = prompt.trim().chars().take(50).collect();
        log::info!("Simulating structured generation with prompt: {}...", preview);

        let recipe = if ingredients_line(prompt).to_lowercase().contains("chicken") {
            chicken_recipe()
        } else {
            pasta_recipe()
        };

        Ok(serde_json::to_string_pretty(&recipe)?)
    }
}

/// The ingredients part of a generator prompt, or the whole prompt when it
/// has no ingredients line.
fn ingredients_line(prompt: &str) -> &str {
    prompt
        .lines()
        .find_map(|line| {
            line.trim()
                .trim_start_matches('-')
                .trim_start()
                .strip_prefix(INGREDIENTS_LABEL)
        })
        .unwrap_or(prompt)
}

fn ingredient(name: &str, quantity: &str, unit: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        quantity: quantity.to_string(),
        unit: unit.to_string(),
    }
}

pub fn chicken_recipe() -> Recipe {
    Recipe {
        title: "One-Pan Honey-Garlic Chicken & Veggies".to_string(),
        prep_time_minutes: 15,
        cook_time_minutes: 35,
        servings: 4,
        ingredients: vec![
            ingredient("Chicken Thighs", "4", "pieces"),
            ingredient("Honey", "1/4", "cup"),
            ingredient("Soy Sauce", "2", "tbsp"),
            ingredient("Minced Garlic", "1", "tbsp"),
            ingredient("Broccoli florets", "3", "cups"),
        ],
        instructions: vec![
            "Preheat oven to 400°F (200°C).".to_string(),
            "Mix honey, soy sauce, and garlic in a small bowl.".to_string(),
            "Toss chicken and broccoli with half the sauce on a baking sheet.".to_string(),
            "Bake for 30 minutes, then brush with remaining sauce and bake for 5 more minutes until chicken is cooked through.".to_string(),
        ],
    }
}

pub fn pasta_recipe() -> Recipe {
    Recipe {
        title: "Simple Tomato and Basil Pasta".to_string(),
        prep_time_minutes: 10,
        cook_time_minutes: 20,
        servings: 2,
        ingredients: vec![
            ingredient("Pasta (Spaghetti or Linguine)", "200", "g"),
            ingredient("Canned Crushed Tomatoes", "1", "can (400g)"),
            ingredient("Fresh Basil", "1/2", "cup"),
            ingredient("Olive Oil", "3", "tbsp"),
            ingredient("Salt and Pepper", "to taste", ""),
        ],
        instructions: vec![
            "Cook pasta according to package directions.".to_string(),
            "In a pan, heat olive oil and add crushed tomatoes. Simmer for 15 minutes.".to_string(),
            "Stir in fresh basil, salt, and pepper.".to_string(),
            "Drain pasta and toss with the sauce. Serve immediately.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::build_prompt;
    use serde_json::json;

    async fn generate_for(ingredients: &str, dietary: &str) -> Recipe {
        let prompt = build_prompt(ingredients, dietary, "Dinner");
        let text = MockProvider.generate(&prompt, &json!({})).await.unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[tokio::test]
    async fn test_chicken_match_is_case_insensitive() {
        for ingredients in ["chicken", "CHICKEN thighs", "rice, Chicken breast", "smoked chickens"] {
            assert_eq!(generate_for(ingredients, "Standard").await, chicken_recipe());
        }
    }

    #[tokio::test]
    async fn test_chicken_on_a_later_ingredient_line() {
        for ingredients in ["salmon\nchicken thighs", "rice\r\nonion\r\nChicken"] {
            assert_eq!(generate_for(ingredients, "Standard").await, chicken_recipe());
        }
    }

    #[tokio::test]
    async fn test_everything_else_is_pasta() {
        for ingredients in ["", "salmon, avocado, rice", "tofu", "chick peas"] {
            assert_eq!(generate_for(ingredients, "Standard").await, pasta_recipe());
        }
    }

    #[tokio::test]
    async fn test_only_ingredients_decide_the_branch() {
        let recipe = generate_for("beef, potatoes", "no chicken please").await;
        assert_eq!(recipe, pasta_recipe());
    }

    #[tokio::test]
    async fn test_output_is_stable_across_calls() {
        let prompt = build_prompt("chicken, bell pepper, onion", "low-carb", "dinner");
        let first = MockProvider.generate(&prompt, &json!({})).await.unwrap();
        let second = MockProvider.generate(&prompt, &json!({})).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_freeform_prompt_falls_back_to_whole_text() {
        let text = MockProvider
            .generate("something with chicken", &json!({}))
            .await
            .unwrap();
        let recipe: Recipe = serde_json::from_str(&text).unwrap();
        assert_eq!(recipe.title, "One-Pan Honey-Garlic Chicken & Veggies");
    }
}
