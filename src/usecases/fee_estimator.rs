//! Fee Estimator - Informational Native Fee Estimate
//!
//! Multiplies a fixed gas-unit constant by the chain's current legacy
//! gas price and by its EIP-1559 max fee, and converts both to native
//! display units (÷10^18). Purely informational: the result never caps
//! or sets the gas of a real transaction.

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::domain::YieldError;
use crate::domain::amount::{wei_to_gwei, wei_to_native};
use crate::ports::chain_client::ChainClient;

/// Fee estimate for one route transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimate {
  /// Gas units assumed.
  pub gas_units: u64,
  /// Legacy gas price (wei).
  pub gas_price_wei: u128,
  /// Legacy gas price (gwei).
  pub gas_price_gwei: Decimal,
  /// gas_units × gas_price (wei).
  pub fee_wei: u128,
  /// gas_units × gas_price in native units.
  pub fee_native: Decimal,
  /// gas_units × EIP-1559 max fee per gas, in native units.
  pub max_fee_native: Decimal,
}

/// Estimate the native fee of a `gas_units` transaction on `chain`.
///
/// # Errors
/// `ChainCallFailure` if either fee read fails, `AmountOverflow` if the
/// product does not fit.
#[instrument(skip(chain), fields(chain_id = chain.chain_id()))]
pub async fn estimate_native_fee<C: ChainClient + ?Sized>(
  chain: &C,
  gas_units: u64,
) -> Result<FeeEstimate, YieldError> {
  let gas_price = chain
    .gas_price()
    .await
    .map_err(|e| YieldError::chain("gas_price", &e))?;

  let fees = chain
    .fee_suggestion()
    .await
    .map_err(|e| YieldError::chain("fee_suggestion", &e))?;

  let fee_wei = u128::from(gas_units)
    .checked_mul(gas_price)
    .ok_or(YieldError::AmountOverflow)?;
  let max_fee_wei = u128::from(gas_units)
    .checked_mul(fees.max_fee_per_gas)
    .ok_or(YieldError::AmountOverflow)?;

  let estimate = FeeEstimate {
    gas_units,
    gas_price_wei: gas_price,
    gas_price_gwei: wei_to_gwei(gas_price)?,
    fee_wei,
    fee_native: wei_to_native(fee_wei)?,
    max_fee_native: wei_to_native(max_fee_wei)?,
  };

  info!(
    gas_units,
    gas_price_wei = gas_price,
    gas_price_gwei = %estimate.gas_price_gwei,
    fee_wei,
    fee_native = %estimate.fee_native,
    max_fee_native = %estimate.max_fee_native,
    max_priority_fee_per_gas = fees.max_priority_fee_per_gas,
    "Fee estimate"
  );

  Ok(estimate)
}
