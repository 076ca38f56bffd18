use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod docs;
pub mod error;
pub mod models;
pub mod routes;

use config::{ServerConfig, SERVICE_NAME};
use docs::{api_doc, DOCS_PATH, OPENAPI_PATH};
use error::ServerError;
use routes::{health::health_check, root::service_info};

pub fn app() -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api_doc()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!("{} starting on {}", SERVICE_NAME, addr);
    serve_on(listener).await
}

/// Serves on an already bound listener until SIGINT or SIGTERM.
pub async fn serve_on(listener: TcpListener) -> Result<(), ServerError> {
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("{} shut down", SERVICE_NAME);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
