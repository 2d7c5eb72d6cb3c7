// src/lib.rs
pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod generator;
pub mod notifier;
pub mod pipeline;
pub mod banner;
pub mod api;
