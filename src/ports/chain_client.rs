//! Chain Client Port - On-chain Interaction Interface
//!
//! Defines the trait for reading ERC-20 state, estimating gas and
//! submitting signed transactions on one EVM chain. One implementor
//! per configured chain; the signing wallet is fixed at construction.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::{TxHash, TxRequest};

/// Current EIP-1559 fee suggestion, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSuggestion {
  /// Suggested max fee per gas.
  pub max_fee_per_gas: u128,
  /// Suggested priority fee (tip) per gas.
  pub max_priority_fee_per_gas: u128,
}

/// Trait for on-chain interactions via alloy-rs.
///
/// Every method is a single RPC round trip except `wait_for_receipt`,
/// which polls until the transaction is mined or a timeout elapses.
/// No method retries.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
  /// Chain id this client signs for.
  fn chain_id(&self) -> u64;

  /// Address of the signing wallet.
  fn wallet(&self) -> Address;

  /// Read `allowance(owner, spender)` on `token`.
  async fn allowance(
    &self,
    token: Address,
    owner: Address,
    spender: Address,
  ) -> anyhow::Result<U256>;

  /// Read `decimals()` on `token`.
  async fn decimals(&self, token: Address) -> anyhow::Result<u8>;

  /// Read `balanceOf(owner)` on `token`.
  async fn balance_of(&self, token: Address, owner: Address) -> anyhow::Result<U256>;

  /// Estimate gas units for a transaction.
  async fn estimate_gas(&self, tx: &TxRequest) -> anyhow::Result<u64>;

  /// Sign and broadcast; returns as soon as the node accepts it.
  async fn send_transaction(&self, tx: &TxRequest) -> anyhow::Result<TxHash>;

  /// Wait until `hash` is mined. Errors if it reverted or timed out.
  async fn wait_for_receipt(&self, hash: TxHash) -> anyhow::Result<()>;

  /// Current legacy gas price in wei.
  async fn gas_price(&self) -> anyhow::Result<u128>;

  /// Current EIP-1559 fee suggestion.
  async fn fee_suggestion(&self) -> anyhow::Result<FeeSuggestion>;
}
