use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
    pub timestamp: i64,
}

/// GET /health - Probes the users collection, the service's one dependency
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    match db.ping().await {
        Ok(users) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            service: "user-registry-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: "reachable".to_string(),
            users: Some(users),
            timestamp: chrono::Utc::now().timestamp(),
        }),
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded".to_string(),
                service: "user-registry-service".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                database: format!("unreachable: {}", e),
                users: None,
                timestamp: chrono::Utc::now().timestamp(),
            })
        }
    }
}
