use crate::config::SERVICE_NAME;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_RUNNING: &str = "running";
pub const STATUS_HEALTHY: &str = "healthy";

/// Body of `GET /`.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct RootResponse {
    #[schema(example = "SERVICE_NAME")]
    pub service: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "production")]
    pub environment: String,
}

impl RootResponse {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: STATUS_RUNNING.to_string(),
            environment: environment.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
        }
    }
}
