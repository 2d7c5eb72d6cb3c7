// src/generator.rs
use serde_json::{Value, json};

use crate::models::{GenerationError, Recipe};
use crate::providers::LlmProvider;

/// Label of the prompt line that carries the requested ingredients.
pub const INGREDIENTS_LABEL: &str = "Main Ingredients:";

const BACKEND_FAILURE: &str = "Failed to generate recipe using AI.";
const INVALID_OUTPUT: &str = "Invalid output from generator.";

/// Line breaks inside a field would split it across prompt lines.
fn single_line(field: &str) -> String {
    field.replace(['\r', '\n'], " ")
}

/// Builds the natural-language prompt. Inputs are embedded as given, empty
/// strings included, with line breaks turned into spaces.
pub fn build_prompt(ingredients: &str, dietary_needs: &str, meal_type: &str) -> String {
    format!(
        r#"Generate a unique, personalized recipe based on the following constraints:
- {} {}
- Dietary/Style Preference: {}
- Meal Type: {}

The output MUST be a JSON object that strictly adheres to the Recipe schema.
Ensure the cooking times are realistic."#,
        INGREDIENTS_LABEL,
        single_line(ingredients),
        single_line(dietary_needs),
        single_line(meal_type)
    )
}

/// JSON schema the backend output has to satisfy.
pub fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {"type": "string"},
            "prep_time_minutes": {"type": "integer"},
            "cook_time_minutes": {"type": "integer"},
            "servings": {"type": "integer"},
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "quantity": {"type": "string"},
                        "unit": {"type": "string"}
                    },
                    "required": ["name", "quantity", "unit"]
                }
            },
            "instructions": {
                "type": "array",
                "items": {"type": "string"}
            }
        },
        "required": [
            "title",
            "prep_time_minutes",
            "cook_time_minutes",
            "servings",
            "ingredients",
            "instructions"
        ]
    })
}

/// Turns meal constraints into a [`Recipe`] using a structured-generation backend.
///
/// Backend failures never escape as `Err` of the crate error type; they come
/// back as a [`GenerationError`] value.
pub struct RecipeGenerator<P> {
    provider: P,
    schema: Value,
}

impl<P: LlmProvider> RecipeGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            schema: recipe_schema(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn generate(
        &self,
        ingredients: &str,
        dietary_needs: &str,
        meal_type: &str,
    ) -> Result<Recipe, GenerationError> {
        let prompt = build_prompt(ingredients, dietary_needs, meal_type);

        let text = self
            .provider
            .generate(&prompt, &self.schema)
            .await
            .map_err(|e| {
                log::error!("Failed to generate recipe: {}", e);
                GenerationError {
                    error: BACKEND_FAILURE.to_string(),
                    reason: e.to_string(),
                    raw_output: None,
                }
            })?;

        serde_json::from_str::<Recipe>(&text).map_err(|e| {
            log::error!("Generator returned output that is not a recipe: {}", e);
            GenerationError {
                error: INVALID_OUTPUT.to_string(),
                reason: format!("invalid output from generator: {}", e),
                raw_output: Some(text.clone()),
            }
        })
    }
}
