use service_template::config::ServerConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("service_template=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to read configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = service_template::serve(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
