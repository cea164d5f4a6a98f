//! API handlers module

pub mod articles;
pub mod health;

use axum::http::{Method, Uri};
use blogforge_common::AppError;

/// Fallback for paths no route matches
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
