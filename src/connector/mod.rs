//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion clients (Groq over HTTP, offline mock)
//! - HTTP API (axum router, controllers, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
