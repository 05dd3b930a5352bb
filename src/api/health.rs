use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::database::UserRepository;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(repo: web::Data<dyn UserRepository>) -> impl Responder {
    let database_ok = match repo.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ Health check: database ping failed: {}", e);
            false
        }
    };

    let response = HealthResponse {
        status: if database_ok { "healthy" } else { "unhealthy" }.to_string(),
        service: "user-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_ok { "connected" } else { "unreachable" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if database_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
