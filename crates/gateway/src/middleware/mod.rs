//! Gateway middleware

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use blogforge_common::{metrics::RequestMetrics, response::EnvelopeCode};

use crate::AppState;

/// Promote the envelope code to the HTTP status when strict status codes are enabled
pub async fn transport_status(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if !state.config.server.strict_status_codes {
        return response;
    }

    if let Some(EnvelopeCode(code)) = response.extensions().get::<EnvelopeCode>().copied() {
        match StatusCode::from_u16(code) {
            Ok(status) => *response.status_mut() = status,
            Err(_) => tracing::warn!(code, "Envelope carries an invalid status code"),
        }
    }

    response
}

/// Request count and latency per matched route
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let tracker = RequestMetrics::start(request.method().as_str(), &endpoint);

    let response = next.run(request).await;

    let code = response
        .extensions()
        .get::<EnvelopeCode>()
        .map(|c| c.0)
        .unwrap_or_else(|| response.status().as_u16());
    tracker.finish(code);

    response
}
