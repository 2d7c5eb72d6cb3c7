// src/api/handlers/generate.rs
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::AppState;
use crate::models::{RecipeData, RecipeRequest};

const FALLBACK_INGREDIENTS: &str = "";
const FALLBACK_DIETARY_NEEDS: &str = "Standard";
const FALLBACK_MEAL_TYPE: &str = "Dinner";
const FALLBACK_USER_EMAIL: &str = "test-user@example.com";

/// Body of `POST /api/generate`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    pub ingredients: Option<String>,
    pub dietary_needs: Option<String>,
    pub meal_type: Option<String>,
    pub user_email: Option<String>,
}

fn or_fallback(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl GenerateRequest {
    /// Fills absent or blank fields with their fallback values.
    pub fn into_recipe_request(self) -> RecipeRequest {
        RecipeRequest {
            ingredients: or_fallback(self.ingredients, FALLBACK_INGREDIENTS),
            dietary_needs: or_fallback(self.dietary_needs, FALLBACK_DIETARY_NEEDS),
            meal_type: or_fallback(self.meal_type, FALLBACK_MEAL_TYPE),
            recipient_email: Some(or_fallback(self.user_email, FALLBACK_USER_EMAIL)),
        }
    }

    /// An empty body or a JSON `null` counts as `{}`.
    fn from_body(body: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Ok(Self::default()),
            other => serde_json::from_value(other),
        }
    }
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub status: &'static str,
    pub recipe_data: RecipeData,
    pub mail_status: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_data: Option<RecipeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_status: Option<String>,
}

impl ErrorResponse {
    fn new(message: String) -> Self {
        Self {
            status: "error",
            message,
            recipe_data: None,
            mail_status: None,
        }
    }
}

pub async fn generate_recipe(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request = match GenerateRequest::from_body(&body) {
        Ok(req) => req.into_recipe_request(),
        Err(e) => {
            log::warn!("Rejected malformed generate request: {}", e);
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new(format!("Malformed request body: {}", e))));
        }
    };

    match state.pipeline.run(&request).await {
        Ok(output) if output.is_success() => Ok(HttpResponse::Ok().json(GenerateResponse {
            status: "success",
            recipe_data: output.recipe_data,
            mail_status: output.delivery.detail,
        })),
        Ok(output) => Ok(HttpResponse::BadGateway().json(ErrorResponse {
            status: "error",
            message: output.delivery.detail.clone(),
            recipe_data: Some(output.recipe_data),
            mail_status: Some(output.delivery.detail),
        })),
        Err(e) => {
            log::error!("An error occurred while handling /api/generate: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("An internal error occurred: {}", e))))
        }
    }
}
