//! Shared state behind every HTTP handler.

use std::sync::Arc;

use crate::adapters::metrics::{HealthState, MetricsRegistry};
use crate::config::AppConfig;
use crate::ports::chain_client::ChainClient;
use crate::ports::route_provider::RouteProvider;
use crate::usecases::plans::YieldPlans;
use crate::usecases::yield_mover::YieldMover;

/// Which chain each read-only endpoint talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Aggregator project the yield token is listed under.
    pub project: String,
    /// Chain whose catalogue `/enso` searches.
    pub market_chain_id: u64,
    /// Chain `/check-balance` reads.
    pub balance_chain_id: u64,
    /// Chain `/calculate-gas` prices.
    pub fee_chain_id: u64,
    /// Gas units assumed by `/calculate-gas`.
    pub gas_units: u64,
    /// Whether `/metrics` is served.
    pub metrics_enabled: bool,
}

impl ServiceSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            project: config.enso.project.clone(),
            market_chain_id: config.chains.gnosis.chain_id,
            balance_chain_id: config.chains.polygon.chain_id,
            fee_chain_id: config.chains.polygon.chain_id,
            gas_units: config.fees.estimated_gas_units,
            metrics_enabled: config.metrics.enabled,
        }
    }
}

/// State shared by all routes.
pub struct AppState<R: RouteProvider, C: ChainClient> {
    pub mover: YieldMover<R, C>,
    pub plans: YieldPlans,
    pub settings: ServiceSettings,
    pub metrics: Arc<MetricsRegistry>,
    pub health: HealthState,
}
