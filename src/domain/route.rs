//! Aggregator routes and their validation.
//!
//! A `Route` is what the route provider hands back: every field is
//! optional because the aggregator's JSON may omit any of them. The
//! orchestration only proceeds with a `ValidatedRoute`, which carries
//! a destination, call data, a concrete value and the resolved spender.

use alloy::primitives::{Address, Bytes, U256};

use super::error::YieldError;

/// Raw route as returned by the aggregator. Immutable, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    /// Contract the prebuilt transaction must be sent to.
    pub to: Option<Address>,
    /// Opaque call data for the prebuilt transaction.
    pub data: Option<Bytes>,
    /// Native value to attach, when the route needs one.
    pub value: Option<U256>,
    /// Address that will pull `tokenIn`, when it differs from `to`.
    pub allowance_target: Option<Address>,
}

/// A route that is safe to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRoute {
    /// Destination of the main transaction.
    pub to: Address,
    /// Call data of the main transaction.
    pub data: Bytes,
    /// Native value, zero when the route omitted it.
    pub value: U256,
    /// Who must hold the allowance on `tokenIn`.
    pub spender: Address,
}

impl Route {
    /// Check that destination and call data are present, and resolve
    /// the spender: `allowance_target` when present, otherwise `to`.
    ///
    /// Empty call data counts as missing: a bare transfer to the router
    /// would never perform the swap.
    pub fn validate(&self) -> Result<ValidatedRoute, YieldError> {
        let to = self
            .to
            .ok_or_else(|| YieldError::InvalidRoute("missing tx.to".to_string()))?;

        let data = match &self.data {
            Some(data) if !data.is_empty() => data.clone(),
            _ => return Err(YieldError::InvalidRoute("missing tx.data".to_string())),
        };

        Ok(ValidatedRoute {
            to,
            data,
            value: self.value.unwrap_or(U256::ZERO),
            spender: self.allowance_target.unwrap_or(to),
        })
    }
}
