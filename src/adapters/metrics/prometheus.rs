//! Prometheus Metrics Registry - Yield Move Observability
//!
//! Counts yield moves by endpoint and outcome, approvals by chain, and
//! records per-endpoint latency. Rendered in the text exposition format
//! by the `/metrics` route of the HTTP surface.

use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Centralized Prometheus metrics for the router.
///
/// All metrics follow the naming convention `yield_router_*`.
pub struct MetricsRegistry {
    /// Prometheus registry.
    registry: Registry,
    /// Moves by endpoint and outcome (`success` or an error kind).
    pub moves_total: IntCounterVec,
    /// Approval transactions sent, by chain id.
    pub approvals_total: IntCounterVec,
    /// End-to-end handler latency (milliseconds).
    pub move_latency_ms: HistogramVec,
}

impl MetricsRegistry {
    /// Create and register all Prometheus metrics.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let moves_total = IntCounterVec::new(
            Opts::new("yield_router_moves_total", "Yield moves handled"),
            &["endpoint", "outcome"],
        )?;

        let approvals_total = IntCounterVec::new(
            Opts::new(
                "yield_router_approvals_total",
                "ERC-20 approvals sent before a route transaction",
            ),
            &["chain"],
        )?;

        let move_latency_ms = HistogramVec::new(
            HistogramOpts::new(
                "yield_router_move_latency_ms",
                "Handler latency in milliseconds",
            )
            .buckets(vec![
                50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 15000.0, 60000.0,
            ]),
            &["endpoint"],
        )?;

        registry.register(Box::new(moves_total.clone()))?;
        registry.register(Box::new(approvals_total.clone()))?;
        registry.register(Box::new(move_latency_ms.clone()))?;

        Ok(Self {
            registry,
            moves_total,
            approvals_total,
            move_latency_ms,
        })
    }

    /// Record one handled request.
    pub fn record_move(&self, endpoint: &str, outcome: &str, elapsed: Duration) {
        self.moves_total
            .with_label_values(&[endpoint, outcome])
            .inc();
        self.move_latency_ms
            .with_label_values(&[endpoint])
            .observe(elapsed.as_secs_f64() * 1000.0);
    }

    /// Record an approval sent on `chain_id`.
    pub fn record_approval(&self, chain_id: u64) {
        self.approvals_total
            .with_label_values(&[&chain_id.to_string()])
            .inc();
    }

    /// Render all metrics in the Prometheus text format.
    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
