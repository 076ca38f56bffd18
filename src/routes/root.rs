use crate::config::current_environment;
use crate::models::responses::RootResponse;
use axum::response::Json;
use tracing::debug;

/// Service metadata
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name, status and deployment environment", body = RootResponse)
    ),
    tag = "Service"
)]
pub async fn service_info() -> Json<RootResponse> {
    let environment = current_environment();
    debug!("Service info requested (environment={})", environment);

    Json(RootResponse::new(environment))
}
