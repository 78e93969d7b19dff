//! # Blog API Server
//!
//! HTTP surface of the blog posts service: route handlers, error mapping,
//! configuration, telemetry and the server lifecycle.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{BlogServer, RunningServer, ServerError};
pub use state::AppState;
