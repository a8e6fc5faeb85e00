//! Health Probes - Liveness and Readiness
//!
//! `/live` answers 200 while the process runs. `/ready` answers 200
//! until graceful shutdown begins, then 503 so load balancers drain.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Shared readiness flag.
#[derive(Debug, Clone)]
pub struct HealthState {
    /// Whether new requests should be routed here.
    accepting: Arc<AtomicBool>,
}

impl HealthState {
    /// Create a ready health state.
    pub fn new() -> Self {
        Self {
            accepting: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Check if the service is ready to serve traffic.
    pub fn is_ready(&self) -> bool {
        self.accepting.load(Ordering::Relaxed)
    }

    /// Flip readiness off for the rest of the process lifetime.
    pub fn mark_shutting_down(&self) {
        self.accepting.store(false, Ordering::Relaxed);
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness probe: always returns 200 if the process is running.
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probe: 200 until shutdown starts, then 503.
pub fn readiness_of(state: &HealthState) -> (StatusCode, &'static str) {
    if state.is_ready() {
        (StatusCode::OK, "READY")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
    }
}
