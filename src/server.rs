// ABOUTME: HTTP server assembly: router, middleware stack, and lifecycle
// ABOUTME: Binds the listener and shuts down gracefully on SIGINT or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use crate::config::ServerConfig;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::providers::initialize_shared_client;
use crate::resources::ServerResources;
use crate::routes::{ActivityRoutes, CityRoutes, HealthRoutes, WeatherRoutes};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Upper bound for handling one request, upstream calls included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the complete application router
///
/// Layers run outermost first: request ID, tracing, CORS, timeout.
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(CityRoutes::routes(Arc::clone(resources)))
        .merge(WeatherRoutes::routes(Arc::clone(resources)))
        .merge(ActivityRoutes::routes(Arc::clone(resources)))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(setup_cors(&resources.config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

/// Trailcast HTTP server
pub struct TrailcastServer {
    resources: Arc<ServerResources>,
}

impl TrailcastServer {
    /// Create a server from prepared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Create a server from configuration, using the Open-Meteo providers
    #[must_use]
    pub fn from_config(config: Arc<ServerConfig>) -> Self {
        initialize_shared_client(
            config.upstream.timeout_secs,
            config.upstream.connect_timeout_secs,
        );
        Self::new(Arc::new(ServerResources::new(config)))
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

        info!(address = %address, "HTTP server listening");

        axum::serve(listener, build_router(&self.resources))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
