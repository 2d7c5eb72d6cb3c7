// src/api/handlers/pages.rs
use actix_web::{HttpRequest, HttpResponse, Responder};
use rust_embed::RustEmbed;
use serde_json::json;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::config::render_template;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// Values the input form is pre-filled with.
pub static FORM_DEFAULTS: LazyLock<serde_json::Value> = LazyLock::new(|| {
    json!({
        "ingredients": "chicken, bell pepper, onion",
        "dietary_needs": "low-carb, high-protein",
        "meal_type": "dinner",
        "user_email": "test-user@example.com"
    })
});

/// Renders the input form.
pub async fn index() -> impl Responder {
    match StaticAssets::get("index.html") {
        Some(content) => {
            let template = String::from_utf8_lossy(&content.data);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(render_template(&template, &FORM_DEFAULTS))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}

pub async fn static_file(req: HttpRequest) -> impl Responder {
    // trim leading '/'
    let path = &req.path()[1..];

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
