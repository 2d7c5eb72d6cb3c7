// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health_check))
                .route("/generate", web::post().to(handlers::generate_recipe)),
        )
        .route("/{_:.*}", web::get().to(handlers::static_file));
}
