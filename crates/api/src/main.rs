use anyhow::{Context, Result};
use yatra_api::{build_app, ApiConfig};
use yatra_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("yatra_api");

    let config = ApiConfig::from_env();
    let bind = config.bind.clone();

    let app = build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(bind = %bind, "yatra guide api started");

    axum::serve(listener, app).await?;
    Ok(())
}
