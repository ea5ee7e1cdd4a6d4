//! Pure domain logic shared by the use cases.

mod prompt_service;

pub use prompt_service::*;
