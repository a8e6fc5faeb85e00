//! Yield move requests and outcomes.
//!
//! A yield move is one pass of route → allowance → gas → send. Direction
//! only decides which token goes in; cross-chain moves add a destination
//! chain and a receiver, and every chain call targets the source chain.

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::transaction::TxHash;

/// Whether funds go into the yield-bearing token or back out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Base token → yield-bearing token.
    Deposit,
    /// Yield-bearing token → base token.
    Withdraw,
}

impl Direction {
    /// Lowercase label for logs and metrics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

/// Everything the orchestration needs to move funds once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldMoveRequest {
    /// Deposit or withdraw.
    pub direction: Direction,
    /// Token spent; approvals are checked on this token.
    pub token_in: Address,
    /// Token received.
    pub token_out: Address,
    /// Amount of `token_in` in base units.
    pub amount: U256,
    /// Chain the wallet signs and submits on.
    pub source_chain: u64,
    /// Chain the route ends on, when different from the source.
    pub destination_chain: Option<u64>,
}

impl YieldMoveRequest {
    /// Same-chain move.
    pub const fn same_chain(
        direction: Direction,
        token_in: Address,
        token_out: Address,
        amount: U256,
        chain_id: u64,
    ) -> Self {
        Self {
            direction,
            token_in,
            token_out,
            amount,
            source_chain: chain_id,
            destination_chain: None,
        }
    }

    /// Move that bridges from `source_chain` to `destination_chain`.
    pub const fn cross_chain(
        direction: Direction,
        token_in: Address,
        token_out: Address,
        amount: U256,
        source_chain: u64,
        destination_chain: u64,
    ) -> Self {
        Self {
            direction,
            token_in,
            token_out,
            amount,
            source_chain,
            destination_chain: Some(destination_chain),
        }
    }

    /// True when the route ends on a different chain than it starts.
    pub fn is_cross_chain(&self) -> bool {
        self.destination_chain
            .is_some_and(|dest| dest != self.source_chain)
    }
}

/// What the allowance guard did before the main transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceOutcome {
    /// Existing allowance already covered the amount.
    Sufficient {
        /// Allowance read from chain.
        current: U256,
    },
    /// An approval for exactly the required amount was mined.
    Approved {
        /// Hash of the approval transaction.
        tx_hash: TxHash,
    },
}

/// Result of a submitted yield move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldMoveReceipt {
    /// Hash of the main (route) transaction. Not awaited.
    pub tx_hash: TxHash,
    /// Approval step outcome.
    pub allowance: AllowanceOutcome,
    /// Gas limit the main transaction was sent with.
    pub gas_limit: u64,
    /// Address that was approved or checked.
    pub spender: Address,
    /// When the main transaction was handed to the RPC.
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_chain_detection() {
        let a = Address::repeat_byte(1);
        let b = Address::repeat_byte(2);
        let one = U256::from(1u64);

        assert!(!YieldMoveRequest::same_chain(Direction::Deposit, a, b, one, 100).is_cross_chain());
        assert!(
            YieldMoveRequest::cross_chain(Direction::Deposit, a, b, one, 137, 100).is_cross_chain()
        );
        // Degenerate "cross-chain" request that stays on one chain.
        assert!(
            !YieldMoveRequest::cross_chain(Direction::Withdraw, a, b, one, 100, 100)
                .is_cross_chain()
        );
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::Deposit.as_str(), "deposit");
        assert_eq!(Direction::Withdraw.as_str(), "withdraw");
    }
}
