use actix_web::web::Json;
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "Q&A API";
const API_VERSION: &str = "1.0.0";

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
}

/// Liveness probe. Answers even when the store is down.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn index() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: format!("{} Service", SERVICE_NAME),
        version: API_VERSION.to_string(),
    })
}
