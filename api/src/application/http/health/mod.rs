use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health_check() -> Result<Response<HealthResponse>, ApiError> {
    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health_check))
}
