//! HTTP API Server
//!
//! Axum-based HTTP server for the question bank.

use std::future::Future;
use std::net::SocketAddr;

use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::AppState;
use super::routes::create_router;
use crate::error::{Result, TriviaError};

/// HTTP API server
pub struct HttpServer {
    listen_addr: String,
    cors_enabled: bool,
    state: AppState,
}

impl HttpServer {
    pub fn new(listen_addr: impl Into<String>, cors_enabled: bool, state: AppState) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            cors_enabled,
            state,
        }
    }

    /// The router with CORS and request tracing applied.
    pub fn app(&self) -> Router {
        let mut app = create_router(self.state.clone());

        if self.cors_enabled {
            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::PUT,
                    Method::POST,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(Any);
            app = app.layer(cors);
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Run the HTTP server until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = self.listen_addr.parse().map_err(|e| {
            TriviaError::Validation(format!(
                "Invalid HTTP listen address {}: {}",
                self.listen_addr, e
            ))
        })?;

        let listener = TcpListener::bind(&addr).await.map_err(TriviaError::Io)?;
        info!("HTTP API server listening on http://{}", addr);

        axum::serve(listener, self.app())
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("HTTP server shutting down");
            })
            .await
            .map_err(TriviaError::Io)?;

        Ok(())
    }
}
