// src/config.rs
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{AppError, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Development-only session secret used when `SECRET_KEY` is not set.
pub const DEV_SECRET_KEY: &str = "super-secret-recipe-key";

/// Mail delivery settings. Any of the three addresses/credentials may be
/// missing, in which case the notifier simulates the send.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub fallback_recipient: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
}

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// Which generation backend the recipe generator talks to.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    Mock,
    Gemini(GeminiConfig),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// High-level application configuration loaded from environment variables.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub backend: BackendConfig,
    pub server: ServerConfig,
    pub secret_key: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Empty or
    /// whitespace-only values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mail = MailConfig {
            sender_email: get("SENDER_EMAIL"),
            sender_password: get("SENDER_PASSWORD"),
            fallback_recipient: get("MANAGER_EMAIL"),
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: parse_port("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
        };

        let backend = match get("RECIPE_BACKEND").as_deref() {
            None | Some("mock") => BackendConfig::Mock,
            Some("gemini") => {
                let api_key = get("GEMINI_API_KEY").ok_or_else(|| {
                    AppError::Config(
                        "RECIPE_BACKEND=gemini requires GEMINI_API_KEY to be set.".to_string(),
                    )
                })?;
                BackendConfig::Gemini(GeminiConfig {
                    api_base: get("GEMINI_API_BASE")
                        .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                    api_key,
                    model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                })
            }
            Some(other) => {
                return Err(AppError::Config(format!(
                    "Unknown RECIPE_BACKEND '{}'. Expected 'mock' or 'gemini'.",
                    other
                )));
            }
        };

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_port("PORT", get("PORT"), DEFAULT_PORT)?,
        };

        Ok(AppConfig {
            mail,
            backend,
            server,
            secret_key: get("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.to_string()),
        })
    }

    /// True when no `SECRET_KEY` was provided and the development default is in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

fn parse_port(key: &str, value: Option<String>, default: u16) -> Result<u16> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a port number, got '{}'", key, raw))),
    }
}

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is a valid regex")
});

/// Simple template renderer using regex.
/// Placeholders are in the format `{{key}}`; unknown keys are left as-is.
pub fn render_template(template: &str, data: &serde_json::Value) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            let key = &caps[1];
            data.get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}
