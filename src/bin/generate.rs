//! Runs the recipe pipeline once from the command line and prints the result.

use clap::Parser;
use mealmail::config::AppConfig;
use mealmail::generator::RecipeGenerator;
use mealmail::models::RecipeRequest;
use mealmail::notifier::Notifier;
use mealmail::pipeline::RecipePipeline;
use mealmail::providers::Backend;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mealmail-generate", version, about = "Generate a recipe and email it")]
struct Args {
    /// Main ingredients, comma separated
    #[arg(long, default_value = "salmon, avocado, rice")]
    ingredients: String,

    /// Dietary or style preferences
    #[arg(long, default_value = "Gluten-Free, Quick Prep")]
    dietary_needs: String,

    #[arg(long, default_value = "Lunch")]
    meal_type: String,

    /// Recipient address; falls back to MANAGER_EMAIL when empty
    #[arg(long, default_value = "test.user@example.com")]
    email: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Mail will be simulated unless SENDER_EMAIL and SENDER_PASSWORD are set");
    }
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = RecipePipeline::new(
        RecipeGenerator::new(Backend::from_config(&config.backend, reqwest::Client::new())),
        Notifier::from_config(&config.mail),
    );

    println!(
        "Starting Recipe Generation for: {} ({} {})...",
        args.ingredients, args.dietary_needs, args.meal_type
    );

    let request = RecipeRequest {
        ingredients: args.ingredients,
        dietary_needs: args.dietary_needs,
        meal_type: args.meal_type,
        recipient_email: Some(args.email),
    };

    let output = match pipeline.run(&request).await {
        Ok(output) => output,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (mail_status, recipe_data) = output.into_pair();
    println!("\n--- FINAL OUTPUT ---");
    println!("Mail Status: {}", mail_status);
    println!("Generated Recipe:");
    match serde_json::to_string_pretty(&recipe_data) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Could not render recipe data: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
