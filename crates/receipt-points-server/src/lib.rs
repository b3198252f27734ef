//! # Receipt Points Server
//!
//! JSON-over-HTTP front end for the receipt service.
//!
//! - `POST /receipts/process` validates a receipt, stores it under a fresh
//!   id, and answers `{"id": "..."}`.
//! - `GET /receipts/{id}/points` answers `{"points": n}` or 404.
//! - `GET /receipts/{id}` answers the stored receipt or 404.
//! - `GET /health` answers the store size.
//!
//! Errors are `{"error": "..."}` with status 400, 404 or 500.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;

pub use api::router;
pub use config::{CliArgs, LogFormat, ServerConfig};
pub use error::ApiError;
pub use logging::init_logging;
pub use server::{run_server, serve};
