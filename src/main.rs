use std::sync::Arc;

use anyhow::Context;
use hubcard::app_state::AppState;
use hubcard::config::Config;
use hubcard::{handlers, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubcard=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::debug!("Using GitHub API at {}", config.api_url);

    let app_state = Arc::new(AppState::from_config(&config)?);
    let app = handlers::router(app_state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Could not bind {address}"))?;
    tracing::info!("Listening on http://{address}");

    axum::serve(listener, app).await?;

    Ok(())
}
