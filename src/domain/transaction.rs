//! Transaction requests handed to a chain client.

use alloy::primitives::{Address, Bytes, U256};

/// Hash identifying a submitted transaction.
pub type TxHash = alloy::primitives::TxHash;

/// A transaction the router wants signed and sent.
///
/// `gas` is `None` while estimating and set to the estimate before
/// submission. Nonce and fee fields are left to the chain client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRequest {
    /// Sender; always the configured wallet.
    pub from: Address,
    /// Destination contract.
    pub to: Address,
    /// Call data.
    pub data: Bytes,
    /// Native value attached.
    pub value: U256,
    /// Gas limit, once estimated.
    pub gas: Option<u64>,
}

impl TxRequest {
    /// Build an unestimated request.
    pub fn new(from: Address, to: Address, data: Bytes, value: U256) -> Self {
        Self {
            from,
            to,
            data,
            value,
            gas: None,
        }
    }

    /// Same request with the gas limit fixed.
    #[must_use]
    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }
}
