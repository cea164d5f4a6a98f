//! Error types for BlogForge services
//!
//! Provides:
//! - Distinct error types for validation, lookup and persistence failures
//! - HTTP status code mapping (used for log severity)
//! - Conversion into the uniform response envelope

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::Envelope;
use crate::validation::FieldError;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Validation failed: {} field(s) rejected", .errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("Invalid request body: {message}")]
    InvalidPayload { message: String },

    #[error("Invalid path parameter: {message}")]
    InvalidPath { message: String },

    // Resource errors
    #[error("Article not found: {id}")]
    ArticleNotFound { id: i32 },

    #[error("Route not found: {method} {path}")]
    RouteNotFound { method: String, path: String },

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Database connection error: {message}")]
    DatabaseConnection { message: String },

    // Internal errors
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation { .. } |
            AppError::InvalidPayload { .. } |
            AppError::InvalidPath { .. } => StatusCode::BAD_REQUEST,

            // 404 Not Found
            AppError::ArticleNotFound { .. } |
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            AppError::Database(_) |
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,

            // 503 Service Unavailable
            AppError::DatabaseConnection { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Check if this error is a client error
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Message safe to hand back to API clients.
    ///
    /// Store and internal failures are reduced to a short description; the
    /// full error is only written to the log.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database operation failed".to_string(),
            AppError::DatabaseConnection { .. } => "Database unavailable".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        // Log based on severity
        if self.is_server_error() {
            tracing::error!(
                error = %message,
                status = status.as_u16(),
                "Server error"
            );
        } else if self.is_client_error() {
            tracing::warn!(
                error = %message,
                status = status.as_u16(),
                "Client error"
            );
        }

        match self {
            AppError::Validation { errors } => Envelope::validation(errors).into_response(),
            other => Envelope::error(other.client_message()).into_response(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath {
            message: rejection.body_text(),
        }
    }
}
