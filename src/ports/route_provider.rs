//! Route Provider Port - Aggregator Interface
//!
//! Defines the trait for asking a route aggregator (Enso) for a
//! prebuilt swap/bridge transaction and for its token catalogue.
//! Failures are typed: "no route" and "could not ask" are different
//! `YieldError` variants.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Route, YieldError};

/// Routing strategy sent with every request.
pub const ROUTING_STRATEGY: &str = "router";

/// Parameters of a route lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Wallet that will sign the route transaction.
    pub from_address: Address,
    /// Tokens spent.
    pub token_in: Vec<Address>,
    /// Tokens received.
    pub token_out: Vec<Address>,
    /// Amounts spent, one per `token_in`.
    pub amount_in: Vec<U256>,
    /// Chain the transaction executes on.
    pub chain_id: u64,
    /// Chain the output lands on, for bridging routes.
    pub destination_chain_id: Option<u64>,
    /// Recipient of the output, for bridging routes.
    pub receiver: Option<Address>,
}

/// Yield token listing from the aggregator's catalogue.
///
/// Field names mirror the aggregator's JSON so the listing can be
/// returned to API callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// Display name.
    pub name: Option<String>,
    /// Chain the token lives on.
    pub chain_id: u64,
    /// Token contract address.
    pub address: String,
    /// Token decimals.
    pub decimals: Option<u8>,
    /// Aggregator token type (`base`, `defi`).
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    /// Project slug, e.g. `aave`.
    pub project: Option<String>,
    /// Protocol slug, e.g. `aave-v3`.
    pub protocol: Option<String>,
    /// Underlying tokens, for wrapped positions.
    #[serde(default)]
    pub underlying_tokens: Option<serde_json::Value>,
    /// Primary address of the position.
    pub primary_address: Option<String>,
    /// Total APY in percent.
    pub apy: Option<f64>,
    /// Base APY in percent.
    pub apy_base: Option<f64>,
    /// Reward APY in percent.
    pub apy_reward: Option<f64>,
    /// Total value locked in USD.
    pub tvl: Option<f64>,
}

/// Trait for route aggregators.
///
/// Implementors must be initialized with their API credential before
/// first use; calls before that fail with `YieldError::NotInitialized`.
#[async_trait]
pub trait RouteProvider: Send + Sync + 'static {
    /// Fetch a prebuilt transaction for the request.
    ///
    /// # Errors
    /// `RouteUnavailable` when the aggregator has no route,
    /// `RouteProvider` on transport/HTTP failure, `InvalidRoute` when
    /// the response is malformed, `NotInitialized` before init.
    async fn get_route(&self, request: &RouteRequest) -> Result<Route, YieldError>;

    /// List the aggregator's tokens for a project on a chain.
    async fn list_tokens(
        &self,
        project: &str,
        chain_id: u64,
    ) -> Result<Vec<TokenMetadata>, YieldError>;
}
