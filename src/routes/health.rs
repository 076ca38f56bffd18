use crate::models::responses::HealthResponse;
use axum::response::Json;
use tracing::debug;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Observability"
)]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check");
    Json(HealthResponse::healthy())
}
