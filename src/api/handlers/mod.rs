// src/api/handlers/mod.rs
mod generate;
mod health;
mod pages;

pub use generate::{generate_recipe, GenerateRequest};
pub use health::health_check;
pub use pages::{index, static_file, FORM_DEFAULTS};
