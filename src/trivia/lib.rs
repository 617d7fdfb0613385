//! # Trivia Architecture
//!
//! Trivia is a **question bank library** with two clients: an HTTP server and
//! a command-line tool. Both are thin; the library decides what a page is,
//! what a search matches and which question a quiz round gets next.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (http/, and cli/ wired by main.rs)                 │
//! │  - Parse requests/arguments into typed commands             │
//! │  - Map error kinds to status codes or exit messages         │
//! │  - The ONLY places that know about sockets or stdout        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the quiz random source                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pagination, filters, quiz selection, create/delete       │
//! │  - Builds the response payloads                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not-found policy
//!
//! A listing is "not found" when its whole filtered set is empty. Asking for a
//! page beyond the end of a non-empty set is answered with an empty page and
//! `success: true`.
//!
//! ## Quiz category 0
//!
//! A quiz round with category id `0` ([`model::ANY_CATEGORY`]) draws from every
//! category. Clients pass the value through unchanged; only the quiz command
//! interprets it.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore` fixtures. Most tests live here.
//! 2. **API**: dispatch checks only.
//! 3. **HTTP**: router tests through `tower::ServiceExt::oneshot`.
//! 4. **CLI**: end-to-end runs of the binary with `assert_cmd` (see `tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic and payloads for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Question`, `Category`, `QuizState`)
//! - [`http`]: Axum routes, handlers and server
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod store;
