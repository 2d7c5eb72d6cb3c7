use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use mealmail::api::{AppState, configure_routes};
use mealmail::banner;
use mealmail::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Mail will be simulated unless SENDER_EMAIL and SENDER_PASSWORD are set");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load app configuration from environment: {}", e);
            std::process::exit(1);
        }
    };

    if app_config.uses_dev_secret() {
        log::warn!("SECRET_KEY is not set; using the development default. Do not deploy like this.");
    }

    let bind = (app_config.server.host.clone(), app_config.server.port);
    let state = AppState::new(app_config);

    log::info!("Recipe backend: {}", state.pipeline.generator().provider().name());
    println!("🚀 Starting server...");
    println!("🍝 Form available at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
