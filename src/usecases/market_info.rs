//! Market Info - Yield Token Lookup
//!
//! Finds the configured yield token in the aggregator's catalogue for
//! a project on a chain. Matching is by address, case-insensitive.

use alloy::primitives::Address;
use tracing::{info, instrument};

use crate::domain::YieldError;
use crate::ports::route_provider::{RouteProvider, TokenMetadata};

/// Fetch the catalogue entry for `token` under `project` on `chain_id`.
///
/// # Errors
/// Whatever `list_tokens` returns, or `TokenNotFound` if the listing
/// does not contain the token.
#[instrument(skip(provider))]
pub async fn find_yield_token<R: RouteProvider + ?Sized>(
  provider: &R,
  project: &str,
  chain_id: u64,
  token: Address,
) -> Result<TokenMetadata, YieldError> {
  let tokens = provider.list_tokens(project, chain_id).await?;
  let listed = tokens.len();

  let found = tokens
    .into_iter()
    .find(|t| {
      t.address
        .parse::<Address>()
        .is_ok_and(|addr| addr == token)
    })
    .ok_or_else(|| YieldError::TokenNotFound(token.to_string()))?;

  info!(
    listed,
    name = ?found.name,
    apy = ?found.apy,
    tvl = ?found.tvl,
    "Yield token found"
  );

  Ok(found)
}
