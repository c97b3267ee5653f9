use std::net::SocketAddr;
use std::sync::Arc;

use common::NominatimGeocoder;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutting down");
        return;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: open the store, build the app and serve until Ctrl+C, then
/// close the store.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_env(&cfg.server.static_dir, cfg.database.data_dir().as_deref()).await?;

    let db = models::db::open(&cfg.database).await?;
    let geocoder = NominatimGeocoder::new(cfg.geocoder.url.clone())?;
    info!(endpoint = %geocoder.endpoint(), "geocoder configured");

    let state = AppState::new(db.clone(), Arc::new(geocoder));
    let app = routes::build_router(state, build_cors(), &cfg.server.static_dir);

    let addr = bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "server running at http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!(event = "store_closed", "database connection closed");
    Ok(())
}
