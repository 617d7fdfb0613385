//! HTTP API Server Module
//!
//! Exposes the question bank over a JSON REST API. Handlers only translate
//! between HTTP and [`TriviaApi`](crate::api::TriviaApi); all rules live in
//! the command layer.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::HttpServer;
