//! # Inkwell API Server
//!
//! Actix-web application serving the `/posts` resource. The binary in
//! `main.rs` wires configuration, telemetry and state around
//! [`handlers::configure_routes`]; integration tests mount the same routes
//! on a test service.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use handlers::configure_routes;
pub use state::{AppState, StartupError};
