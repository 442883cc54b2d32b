mod app;
mod config;
mod demo;
mod page;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::load_default().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });
    config.apply_env();

    let (router, mut submissions) = app::build(config.form.clone())?;

    // Log every validated search
    tokio::spawn(async move {
        while let Some(values) = submissions.recv().await {
            info!(?values, "search submitted");
        }
    });

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
