// src/providers/gemini.rs

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{AppError, Result};
use crate::providers::LlmProvider;

/// A provider for Google's Gemini models using structured (JSON schema) output.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn request_body(prompt: &str, schema: &Value) -> Value {
    json!({
        "contents": [{"parts": [{"text": prompt}]}],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

/// Pulls the first candidate's text out of a `generateContent` response.
fn extract_text(response_json: &Value) -> Result<String> {
    if let Some(error) = response_json.get("error") {
        return Err(AppError::ApiResponse(error.to_string()));
    }

    let output = response_json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| AppError::UnexpectedResponse(response_json.to_string()))?;

    if output.is_empty() {
        return Err(AppError::EmptyResponse);
    }

    Ok(output.to_string())
}

impl LlmProvider for GeminiProvider {
    /// Calls the Gemini API and returns the JSON text of the first candidate.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        let url = self.url();

        log::info!("Calling Gemini: {} with model: {}", url, self.config.model);

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request_body(prompt, schema))
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(AppError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_json: Value = resp.json().await?;
        extract_text(&response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_carries_schema() {
        let schema = json!({"type": "object"});
        let body = request_body("make dinner", &schema);

        assert_eq!(body["contents"][0]["parts"][0]["text"], "make dinner");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let provider = GeminiProvider::new(
            Client::new(),
            GeminiConfig {
                api_base: "https://example.test/".to_string(),
                api_key: "k".to_string(),
                model: "gemini-2.5-flash".to_string(),
            },
        );
        assert_eq!(
            provider.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_extract_text() {
        let ok = json!({
            "candidates": [{"content": {"parts": [{"text": "{\"title\":\"x\"}"}]}}]
        });
        assert_eq!(extract_text(&ok).unwrap(), "{\"title\":\"x\"}");

        let api_error = json!({"error": {"code": 429, "message": "quota"}});
        assert!(matches!(extract_text(&api_error), Err(AppError::ApiResponse(_))));

        let empty = json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]});
        assert!(matches!(extract_text(&empty), Err(AppError::EmptyResponse)));

        let missing = json!({"candidates": []});
        assert!(matches!(
            extract_text(&missing),
            Err(AppError::UnexpectedResponse(_))
        ));
    }
}
