use oculonnx::{config, model, server};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Init
    model::loader::init_ort()?;

    // 2. Load Config (defaults when no config.yaml is present)
    let config: config::AppConfig = if Path::new(config::CONFIG_PATH).exists() {
        let config_content = fs::read_to_string(config::CONFIG_PATH)?;
        serde_yaml::from_str(&config_content)?
    } else {
        config::AppConfig::default()
    };

    // 3. Load the classifier artifact; failure here is fatal and the service
    //    never starts listening without a model
    info!("Loading classifier from {}", config.model.path);
    let session = model::loader::load_model(&config.model.path)?;
    let classifier = model::OrtClassifier::new(session)?;

    let state = Arc::new(server::types::AppState::new(classifier));

    // 4. Create Router
    let app = server::routes::create_router(state);

    // 5. Bind & Serve
    let listener =
        TcpListener::bind(format!("{}:{}", config.server.host, config.server.port)).await?;
    info!(
        "Server listening on http://{}:{}",
        config.server.host, config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
