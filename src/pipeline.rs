// src/pipeline.rs
use std::time::Instant;

use crate::errors::Result;
use crate::generator::RecipeGenerator;
use crate::models::{DeliveryResult, PipelineOutput, Recipe, RecipeData, RecipeRequest};
use crate::notifier::Notifier;
use crate::providers::LlmProvider;

/// Generate a recipe, then mail it. Delivery is only attempted when
/// generation succeeded.
pub struct RecipePipeline<P> {
    generator: RecipeGenerator<P>,
    notifier: Notifier,
}

/// Subject line of the recipe email.
pub fn email_subject(recipe: &Recipe) -> String {
    format!("Your Personalized Recipe: {}", recipe.title)
}

/// Human-readable summary followed by the full recipe as JSON.
pub fn email_body(recipe: &Recipe, recipe_json: &str) -> String {
    let separator = "-".repeat(52);
    format!(
        r#"Your personalized recipe, "{}", is ready!

Prep Time: {} minutes
Cook Time: {} minutes
Servings: {}

Full recipe details are included below.

{}
FULL RECIPE DETAILS (JSON Format):

{}
"#,
        recipe.title,
        recipe.prep_time_minutes,
        recipe.cook_time_minutes,
        recipe.servings,
        separator,
        recipe_json
    )
}

impl<P: LlmProvider> RecipePipeline<P> {
    pub fn new(generator: RecipeGenerator<P>, notifier: Notifier) -> Self {
        Self {
            generator,
            notifier,
        }
    }

    pub fn generator(&self) -> &RecipeGenerator<P> {
        &self.generator
    }

    /// Runs one request to completion.
    ///
    /// A failed generation is reported in the returned [`PipelineOutput`];
    /// only a failed mail transport comes back as `Err`.
    pub async fn run(&self, request: &RecipeRequest) -> Result<PipelineOutput> {
        let start = Instant::now();

        log::info!(
            "Generating recipe for: {} ({} {})",
            request.ingredients,
            request.dietary_needs,
            request.meal_type
        );

        let recipe = match self
            .generator
            .generate(&request.ingredients, &request.dietary_needs, &request.meal_type)
            .await
        {
            Ok(recipe) => recipe,
            Err(generation_error) => {
                log::warn!("Recipe generation failed: {}", generation_error);
                return Ok(PipelineOutput {
                    delivery: DeliveryResult::failed(format!(
                        "Recipe Generation Failed: {}",
                        generation_error.reason
                    )),
                    recipe_data: RecipeData::Error(generation_error),
                });
            }
        };

        log::info!("Generated \"{}\", sending notification", recipe.title);

        let recipe_json = recipe.to_pretty_json()?;
        let subject = email_subject(&recipe);
        let body = email_body(&recipe, &recipe_json);

        let delivery = self
            .notifier
            .send(&subject, &body, request.recipient_email.as_deref())
            .await?;

        log::info!(
            "Pipeline finished in {}ms ({})",
            start.elapsed().as_millis(),
            delivery.status
        );

        Ok(PipelineOutput {
            delivery,
            recipe_data: RecipeData::Recipe(recipe),
        })
    }
}
