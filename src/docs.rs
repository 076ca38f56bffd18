use crate::config::SERVICE_NAME;
use crate::models::responses::{HealthResponse, RootResponse};
use crate::routes;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    paths(routes::root::service_info, routes::health::health_check),
    components(schemas(RootResponse, HealthResponse)),
    tags(
        (name = "Service", description = "Service metadata"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document titled with the generated service name.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_NAME.to_string();
    doc
}
