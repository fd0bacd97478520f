use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use local_library::{render, routes, settings, AppState, CatalogStore, MongoStore, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("local_library=debug,tower_http=debug")),
        )
        .init();

    let config = Settings::load();
    settings::set_environment(config.environment);
    render::init()?;

    let store = MongoStore::connect(&config.mongodb_uri, &config.database).await?;
    // The driver reconnects on demand, so an unreachable store at startup is
    // a degraded state (visible on /ready), not a fatal one.
    match store.ping().await {
        Ok(()) => tracing::info!(db = %config.database, "database reachable"),
        Err(err) => tracing::warn!(%err, "database unreachable; serving degraded until it answers"),
    }

    let state = AppState::new(Arc::new(store), config.clone());
    let app = routes::app(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
