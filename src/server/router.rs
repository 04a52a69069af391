use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    foundation::error::FathomResult,
    server::{
        handlers,
        state::{AppState, ServerConfig},
    },
};

/// Every route of the service over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/catalog", get(handlers::catalog))
        .route("/api/zone", get(handlers::zone))
        .route("/api/zone/chart", get(handlers::zone_chart))
        .route("/api/pixel", get(handlers::pixel))
        .route("/api/pixel/summary", get(handlers::pixel_summary))
        .route("/api/pixel-data", get(handlers::pixel_data))
        .route("/api/globe", get(handlers::globe))
        .route("/api/colorscale", get(handlers::colorscale))
        .route("/api/colorbar.png", get(handlers::colorbar_png))
        .route("/api/email", post(handlers::email))
        .route(
            "/assets/images/indicators/:indicator/:scenario/:period",
            get(handlers::indicator_image),
        )
        .route("/assets/geoJSONs/:name", get(handlers::geojson))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> FathomResult<()> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let state = Arc::new(AppState::from_config(&config, &cwd));
    tracing::info!(
        data = %state.data.root().display(),
        assets = %state.assets.root().display(),
        "data directories resolved"
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    let addr = listener.local_addr().context("read listen address")?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "ctrl-c handler unavailable; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
