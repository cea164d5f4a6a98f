//! Liveness and readiness probes, answered through the article envelope

use std::time::Instant;

use axum::extract::State;
use serde::Serialize;

use crate::AppState;
use blogforge_common::{errors::Result, Envelope, Repository};

/// Article store round trip
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub database: &'static str,
    pub latency_ms: u64,
}

/// The process is up and routing
pub async fn health() -> Envelope<&'static str> {
    Envelope::ok("healthy")
}

/// The article store answers a ping; otherwise the `error` envelope
pub async fn ready(State(state): State<AppState>) -> Result<Envelope<StoreCheck>> {
    let start = Instant::now();
    Repository::new(state.db.clone()).ping().await?;

    Ok(Envelope::ok(StoreCheck {
        database: "up",
        latency_ms: start.elapsed().as_millis() as u64,
    }))
}
