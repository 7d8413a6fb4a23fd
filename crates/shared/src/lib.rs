//! Shared types, errors, and configuration for Comercio.
//!
//! This crate holds the pieces every layer needs: the application
//! configuration loader and the top-level error taxonomy that domain and
//! repository errors converge into before becoming HTTP responses.

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, AppResult};
