//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes::items::ItemsApiState;
use super::routes::{health, items};
use crate::core::CoreApp;
use crate::core::constants::UPLOAD_BODY_LIMIT;
use crate::vault::Vault;

/// Build the application router over a vault handle
pub fn build_router(vault: Arc<dyn Vault>) -> Router {
    let state = ItemsApiState { vault };

    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/items",
            get(items::list_items).post(items::upload_item),
        )
        .route("/vault/{id}", get(items::get_item_content))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct ApiServer {
    app: CoreApp,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        Self { app }
    }

    /// Serve until shutdown is triggered; returns CoreApp for the
    /// final shutdown sequence
    pub async fn start(self) -> Result<CoreApp> {
        let Self { app } = self;

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let router = build_router(app.vault.clone());

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "TagVault listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(app.shutdown.wait())
            .await?;

        Ok(app)
    }
}
