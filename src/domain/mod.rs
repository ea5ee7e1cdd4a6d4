//! # Domain Layer
//!
//! Chat models, errors, and prompt construction.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
