mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::Client;

use crate::config::CONFIG;
use crate::middleware::SessionMiddleware;
use crate::repositories::{CategoryRepository, RecipeRepository, UserRepository};
use crate::services::{AuthService, CategoryService, RecipeService, SessionBlacklist};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongo_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    db.run_command(bson::doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB database {}", CONFIG.database_name);

    // Repositories and indexes
    let recipe_repository = RecipeRepository::new(&db);
    recipe_repository
        .create_indexes()
        .await
        .expect("Failed to create recipe indexes");

    let user_repository = UserRepository::new(&db);
    user_repository
        .create_indexes()
        .await
        .expect("Failed to create user indexes");

    // Initialize services
    let recipe_service = web::Data::new(RecipeService::new(recipe_repository));
    let category_service = web::Data::new(CategoryService::new(CategoryRepository::new(&db)));
    let auth_service = web::Data::new(AuthService::new(user_repository));
    let session_blacklist = SessionBlacklist::new();
    let blacklist_data = web::Data::new(session_blacklist.clone());

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(SessionMiddleware::new(session_blacklist.clone()))
            .wrap(Logger::default())
            .app_data(recipe_service.clone())
            .app_data(category_service.clone())
            .app_data(auth_service.clone())
            .app_data(blacklist_data.clone())
            .configure(
                routes::configure_routes::<RecipeRepository, UserRepository, CategoryRepository>,
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
