//! Metrics and Monitoring Adapters
//!
//! Prometheus metrics and the liveness/readiness probes served by the
//! HTTP surface.

pub mod health;
pub mod prometheus;

pub use health::HealthState;
pub use prometheus::MetricsRegistry;
