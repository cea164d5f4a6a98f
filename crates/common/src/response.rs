//! Uniform response envelope
//!
//! Every API response body has the shape `{ "status", "code", "data" }`.
//! The envelope is written with transport status 200; the advisory `code`
//! travels alongside as an [`EnvelopeCode`] response extension so that a
//! middleware can promote it to the real HTTP status when configured to.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// Outcome marker carried in the envelope's `status` field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnvelopeStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "validation")]
    Validation,
}

/// Response extension holding the envelope's advisory code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeCode(pub u16);

/// `{status, code, data}` wrapper applied to every response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub code: u16,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Successful read or update
    pub fn ok(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            code: StatusCode::OK.as_u16(),
            data,
        }
    }

    /// Successful creation
    pub fn created(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            code: StatusCode::CREATED.as_u16(),
            data,
        }
    }
}

impl Envelope<String> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            code: StatusCode::BAD_REQUEST.as_u16(),
            data: message.into(),
        }
    }
}

impl Envelope<Vec<FieldError>> {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: EnvelopeStatus::Validation,
            code: StatusCode::BAD_REQUEST.as_u16(),
            data: errors,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let code = EnvelopeCode(self.code);
        let mut response = (StatusCode::OK, Json(self)).into_response();
        response.extensions_mut().insert(code);
        response
    }
}
