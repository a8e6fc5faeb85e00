//! Yield routing error taxonomy.
//!
//! Every failure of a yield move is one of these variants. The HTTP
//! boundary renders the `Display` text as `{"error": ...}`, so messages
//! are written for API consumers.

use thiserror::Error;

/// Errors raised while routing, approving, or submitting a yield move.
#[derive(Debug, Error)]
pub enum YieldError {
    /// The aggregator answered but produced no route.
    #[error("Failed to fetch Enso route")]
    RouteUnavailable,

    /// The route is missing its destination or call data, or is malformed.
    #[error("Invalid transaction data from Enso: {0}")]
    InvalidRoute(String),

    /// The routing client was used before its API credential was set.
    #[error("Enso not initialized")]
    NotInitialized,

    /// Transport or HTTP failure talking to the aggregator.
    #[error("Enso request failed: {0}")]
    RouteProvider(String),

    /// Any read, estimate, or submit failure against a chain.
    #[error("{operation} failed: {message}")]
    ChainCallFailure {
        /// Which chain operation failed (e.g. `allowance`, `estimate_gas`).
        operation: &'static str,
        /// Underlying error chain, flattened.
        message: String,
    },

    /// No chain client is configured for this chain id.
    #[error("No chain client configured for chain {0}")]
    UnsupportedChain(u64),

    /// An amount string could not be parsed as an unsigned integer.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A raw value does not fit the display conversion.
    #[error("Amount too large to convert")]
    AmountOverflow,

    /// The aggregator's token list does not contain the requested token.
    #[error("Token {0} not found in Enso token list")]
    TokenNotFound(String),
}

impl YieldError {
    /// Wrap an adapter error as a chain call failure for `operation`.
    pub fn chain(operation: &'static str, err: &anyhow::Error) -> Self {
        Self::ChainCallFailure {
            operation,
            message: format!("{err:#}"),
        }
    }

    /// Short machine label used in metrics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RouteUnavailable => "route_unavailable",
            Self::InvalidRoute(_) => "invalid_route",
            Self::NotInitialized => "not_initialized",
            Self::RouteProvider(_) => "route_provider",
            Self::ChainCallFailure { .. } => "chain_call_failure",
            Self::UnsupportedChain(_) => "unsupported_chain",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::AmountOverflow => "amount_overflow",
            Self::TokenNotFound(_) => "token_not_found",
        }
    }
}
