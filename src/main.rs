//! Server entrypoint: loads config, connects and pings MySQL, serves the user routes.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use user_service::{app, AppState, Config, MySqlUserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("user_service=info,tower_http=info")),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let store = MySqlUserStore::connect(&config.dsn).await?;
    tracing::info!("database connection verified");
    let state = AppState::new(store);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
