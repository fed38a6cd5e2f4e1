use anyhow::Context;

use jobboard_api::{app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jobboard_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let profiles = app::build_profile_store(&config)
        .await
        .context("failed to open employer profile store")?;

    let router = app::build_app(&config, profiles);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
