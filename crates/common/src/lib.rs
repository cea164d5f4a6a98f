//! BlogForge Common Library
//!
//! Shared code for the BlogForge article service:
//! - Article entity, connection pool and repository
//! - Payload validation and fixed-field serialization
//! - Error types and the response envelope
//! - Configuration management
//! - Metrics

pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod response;
pub mod serializer;
pub mod validation;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};
pub use response::Envelope;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
