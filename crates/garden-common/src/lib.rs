//! # garden-common
//!
//! Shared utilities including configuration, error handling, credential
//! primitives, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{generate_unusable_secret, hash_password, verify_password, PasswordService};
pub use config::{AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
