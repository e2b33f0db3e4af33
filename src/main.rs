mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod templates;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use state::AppState;
use templates::TemplateEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("portfolio-site starting");

    let config = Config::from_env()?;
    config.log_startup();

    let engine = TemplateEngine::load(&config.template_dir, handlers::pages::TEMPLATES)?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        templates: Arc::new(engine),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
