//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use currency_directory::CurrencyDirectory;
use fx_types::RateProvider;

use super::handlers::{self, AppState};
use crate::ConversionService;

/// HTTP Server for the conversion API.
pub struct HttpServer<P: RateProvider + 'static> {
    state: Arc<AppState<P>>,
}

impl<P: RateProvider + 'static> HttpServer<P> {
    /// Creates a new HTTP server with the given service and directory.
    pub fn new(service: ConversionService<P>, directory: CurrencyDirectory) -> Self {
        Self {
            state: Arc::new(AppState { service, directory }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/convert", post(handlers::convert::<P>))
            .route("/api/currencies", get(handlers::list_currencies::<P>))
            .route("/api/currencies/{code}", get(handlers::get_currency::<P>))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
