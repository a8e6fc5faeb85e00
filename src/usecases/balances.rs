//! Token Balance Query - Read-only ERC-20 Lookup
//!
//! Two independent reads (decimals, then balanceOf). No caching and no
//! atomicity between them; decimals effectively never change.

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::domain::YieldError;
use crate::domain::amount::to_display_units;
use crate::ports::chain_client::ChainClient;

/// On-chain token balance information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBalance {
  /// Balance in base units.
  pub balance: U256,
  /// Token decimals.
  pub decimals: u8,
}

impl TokenBalance {
  /// Balance in human-readable units (divided by 10^decimals).
  ///
  /// # Errors
  /// `AmountOverflow` when the balance does not fit a `Decimal`.
  pub fn display(&self) -> Result<Decimal, YieldError> {
    to_display_units(self.balance, self.decimals)
  }
}

/// Read `decimals()` and `balanceOf(owner)` for `token`.
///
/// # Errors
/// `ChainCallFailure` naming whichever read failed.
#[instrument(skip(chain), fields(chain_id = chain.chain_id()))]
pub async fn get_token_balance<C: ChainClient + ?Sized>(
  chain: &C,
  token: Address,
  owner: Address,
) -> Result<TokenBalance, YieldError> {
  let decimals = chain
    .decimals(token)
    .await
    .map_err(|e| YieldError::chain("decimals", &e))?;

  let balance = chain
    .balance_of(token, owner)
    .await
    .map_err(|e| YieldError::chain("balanceOf", &e))?;

  Ok(TokenBalance { balance, decimals })
}
