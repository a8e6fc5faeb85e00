//! Allowance Guard Use Case - Approve Before Spend
//!
//! Reads the live ERC-20 allowance for (owner, token, spender) and, when
//! it is below the amount about to move, sends `approve(spender, amount)`
//! for exactly that amount and waits for it to be mined.
//!
//! Nothing is cached: every call re-reads chain state. Check and use are
//! not atomic, so two concurrent moves from the same wallet can race.

use alloy::primitives::{Address, U256};
use tracing::{info, instrument};

use crate::domain::amount::approval_needed;
use crate::domain::erc20::approve_calldata;
use crate::domain::{AllowanceOutcome, TxRequest, YieldError};
use crate::ports::chain_client::ChainClient;

/// Ensure `spender` may move `required` of `token` on behalf of `owner`.
///
/// # Errors
/// `ChainCallFailure` if the allowance read, the approval submission,
/// or the wait for its receipt fails. Nothing is retried.
#[instrument(skip(chain), fields(chain_id = chain.chain_id()))]
pub async fn ensure_allowance<C: ChainClient + ?Sized>(
  chain: &C,
  owner: Address,
  token: Address,
  spender: Address,
  required: U256,
) -> Result<AllowanceOutcome, YieldError> {
  let current = chain
    .allowance(token, owner, spender)
    .await
    .map_err(|e| YieldError::chain("allowance", &e))?;

  if !approval_needed(current, required) {
    info!(current = %current, required = %required, "Allowance sufficient");
    return Ok(AllowanceOutcome::Sufficient { current });
  }

  info!(
    current = %current,
    required = %required,
    spender = %spender,
    "Submitting approval"
  );

  let approve = TxRequest::new(owner, token, approve_calldata(spender, required), U256::ZERO);

  let tx_hash = chain
    .send_transaction(&approve)
    .await
    .map_err(|e| YieldError::chain("approve", &e))?;

  chain
    .wait_for_receipt(tx_hash)
    .await
    .map_err(|e| YieldError::chain("approve receipt", &e))?;

  info!(tx_hash = %tx_hash, "Approval mined");
  Ok(AllowanceOutcome::Approved { tx_hash })
}
