// src/providers/mod.rs

use reqwest::Client;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::errors::Result;

pub mod gemini;
pub mod mock;

use gemini::GeminiProvider;
use mock::MockProvider;

/// A common trait for structured-generation backends.
/// The mock and the real Gemini backend are interchangeable behind it.
///
/// Backends are chosen statically (`Backend` enum or a generic parameter), so
/// this trait uses native async methods. The mail seam is held as a trait
/// object and goes through `async_trait` instead.
pub trait LlmProvider: Send + Sync {
    /// Generates schema-constrained output from a prompt.
    ///
    /// # Arguments
    /// * `prompt` - The freeform prompt to send to the model.
    /// * `schema` - JSON schema the model output must conform to.
    ///
    /// # Returns
    /// The raw text the model produced. Callers decode it themselves.
    fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Backend selected at startup from configuration.
pub enum Backend {
    Mock(MockProvider),
    Gemini(GeminiProvider),
}

impl Backend {
    pub fn from_config(config: &BackendConfig, client: Client) -> Self {
        match config {
            BackendConfig::Mock => Backend::Mock(MockProvider),
            BackendConfig::Gemini(gemini) => {
                Backend::Gemini(GeminiProvider::new(client, gemini.clone()))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Mock(_) => "mock",
            Backend::Gemini(_) => "gemini",
        }
    }
}

impl LlmProvider for Backend {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        match self {
            Backend::Mock(provider) => provider.generate(prompt, schema).await,
            Backend::Gemini(provider) => provider.generate(prompt, schema).await,
        }
    }
}
