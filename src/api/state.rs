// src/api/state.rs
use crate::config::AppConfig;
use crate::generator::RecipeGenerator;
use crate::notifier::Notifier;
use crate::pipeline::RecipePipeline;
use crate::providers::Backend;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<RecipePipeline<Backend>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let notifier = Notifier::from_config(&config.mail);
        Self::with_notifier(config, notifier)
    }

    /// Same as [`AppState::new`] but with a caller-supplied notifier.
    pub fn with_notifier(config: AppConfig, notifier: Notifier) -> Self {
        let backend = Backend::from_config(&config.backend, Client::new());
        let pipeline = RecipePipeline::new(RecipeGenerator::new(backend), notifier);
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
