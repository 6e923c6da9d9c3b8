use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongo_uri: String,
    pub database_name: String,
    pub secret_key: String,
    pub session_expiration_hours: i64,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            mongo_uri: env::var("MONGO_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("MONGO_DBNAME").unwrap_or_else(|_| "recipe_book".to_string()),
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| "change-this-session-secret-in-production".to_string()),
            session_expiration_hours: env::var("SESSION_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("SESSION_EXPIRATION_HOURS must be a valid number"),
            secure_cookies: env::var("SECURE_COOKIES")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
