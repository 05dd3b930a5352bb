mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod ui;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::database::{MongoUserRepository, UserRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::AppConfig::from_env().map_err(std::io::Error::other)?;

    log::info!("🚀 Starting User Service...");
    log::info!("📊 Database: {} ({})", config.database_url, config.database_name);

    let db = database::MongoDB::new(&config.database_url, &config.database_name)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to MongoDB: {}", e)))?;

    log::info!("✅ MongoDB connected successfully");

    let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db));
    let repo_data = web::Data::from(repo);

    let api_client = ui::ApiClient::new(&config.api_base_url, config.request_timeout)
        .map_err(std::io::Error::other)?;
    log::info!("🖥️  UI talks to API at: {}", api_client.base_url());
    let api_client_data = web::Data::new(api_client);

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let allowed_origins = config.allowed_origins.clone();
    let request_timeout = config.request_timeout;

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(repo_data.clone())
            .app_data(api_client_data.clone())
            .wrap(middleware::RequestTimeout::new(request_timeout))
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // REST API
            .configure(api::configure)
            // Browser UI
            .configure(ui::configure)
    })
    .client_request_timeout(request_timeout)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
