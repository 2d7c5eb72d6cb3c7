// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal constraints for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    pub ingredients: String,
    pub dietary_needs: String,
    pub meal_type: String,
    pub recipient_email: Option<String>,
}

/// A single ingredient line. Quantity and unit are free text, e.g. "1/2" and "cup".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Pretty-printed JSON, as embedded in emails and shown to users.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Why the generator could not produce a recipe.
///
/// `raw_output` is only set when the backend answered with text that did not
/// decode as a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationError {
    pub error: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.reason)
    }
}

/// Either a recipe or the reason there is none. Serialized untagged, so the
/// JSON is the bare recipe object or the `{error, reason}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecipeData {
    Recipe(Recipe),
    Error(GenerationError),
}

impl RecipeData {
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            RecipeData::Recipe(recipe) => Some(recipe),
            RecipeData::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            RecipeData::Recipe(_) => None,
            RecipeData::Error(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Delivered,
    Simulated,
    Failed,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::Delivered => write!(f, "delivered"),
            DeliveryStatus::Simulated => write!(f, "simulated"),
            DeliveryStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of the notification step, with a human-readable detail line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    pub status: DeliveryStatus,
    pub detail: String,
}

impl DeliveryResult {
    pub fn delivered(detail: impl Into<String>) -> Self {
        Self { status: DeliveryStatus::Delivered, detail: detail.into() }
    }

    pub fn simulated(detail: impl Into<String>) -> Self {
        Self { status: DeliveryStatus::Simulated, detail: detail.into() }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self { status: DeliveryStatus::Failed, detail: detail.into() }
    }
}

/// What a pipeline run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    pub delivery: DeliveryResult,
    pub recipe_data: RecipeData,
}

impl PipelineOutput {
    pub fn is_success(&self) -> bool {
        matches!(self.recipe_data, RecipeData::Recipe(_))
    }

    /// The `(status line, recipe data)` pair printed by the direct-invocation binary.
    pub fn into_pair(self) -> (String, RecipeData) {
        (self.delivery.detail, self.recipe_data)
    }
}
