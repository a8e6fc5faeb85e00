//! Yield Mover Use Case - Deposit/Withdraw Orchestration
//!
//! Runs one yield move end to end against the source chain:
//! 1. Fetch a route from the aggregator
//! 2. Validate destination + call data, resolve the spender
//! 3. Ensure the spender's allowance on `token_in` (approve + wait)
//! 4. Estimate gas for the route transaction
//! 5. Submit it with that gas limit and return its hash
//!
//! The main transaction is fire-and-forget: only the approval is
//! awaited. Any failure aborts the remaining steps; nothing is retried
//! and a granted approval is never revoked.

use std::collections::HashMap;
use std::sync::Arc;

use alloy::primitives::Address;
use anyhow::ensure;
use chrono::Utc;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::domain::{TxRequest, YieldError, YieldMoveReceipt, YieldMoveRequest};
use crate::ports::chain_client::ChainClient;
use crate::ports::route_provider::{RouteProvider, RouteRequest};

use super::allowance_guard::ensure_allowance;

/// Orchestrates yield moves for a single wallet.
///
/// The wallet is injected at construction; chain clients are keyed by
/// chain id and must sign for that same wallet. Concurrent moves share
/// no lock.
pub struct YieldMover<R: RouteProvider, C: ChainClient> {
  routes: Arc<R>,
  chains: HashMap<u64, Arc<C>>,
  wallet: Address,
}

impl<R: RouteProvider, C: ChainClient> YieldMover<R, C> {
  /// Create a mover for `wallet` over the given chain clients.
  ///
  /// # Errors
  /// Fails if a chain client signs for a different wallet.
  pub fn new(
    routes: Arc<R>,
    chains: impl IntoIterator<Item = Arc<C>>,
    wallet: Address,
  ) -> anyhow::Result<Self> {
    let mut by_id = HashMap::new();
    for client in chains {
      ensure!(
        client.wallet() == wallet,
        "Chain {} client signs for {}, expected {wallet}",
        client.chain_id(),
        client.wallet()
      );
      by_id.insert(client.chain_id(), client);
    }

    Ok(Self {
      routes,
      chains: by_id,
      wallet,
    })
  }

  /// The wallet every move is signed by.
  pub const fn wallet(&self) -> Address {
    self.wallet
  }

  /// The route provider, shared with read-only endpoints.
  pub fn routes(&self) -> &Arc<R> {
    &self.routes
  }

  /// The chain client for `chain_id`.
  ///
  /// # Errors
  /// `UnsupportedChain` if no client was registered for it.
  pub fn chain(&self, chain_id: u64) -> Result<&Arc<C>, YieldError> {
    self
      .chains
      .get(&chain_id)
      .ok_or(YieldError::UnsupportedChain(chain_id))
  }

  /// Execute one yield move and return the submitted transaction.
  ///
  /// `endpoint` labels the move span.
  ///
  /// # Errors
  /// `RouteUnavailable`/`RouteProvider`/`NotInitialized` from the route
  /// lookup, `InvalidRoute` if the route lacks `to` or `data` (no chain
  /// call is made in any of these cases), `UnsupportedChain` if the
  /// source chain has no client, `ChainCallFailure` for any chain step.
  pub async fn execute(
    &self,
    endpoint: &'static str,
    request: &YieldMoveRequest,
  ) -> Result<YieldMoveReceipt, YieldError> {
    let span = info_span!(
      "yield_move",
      move_id = %Uuid::new_v4(),
      endpoint,
      direction = request.direction.as_str(),
      source_chain = request.source_chain,
      destination_chain = ?request.destination_chain,
    );

    self.execute_inner(request).instrument(span).await
  }

  async fn execute_inner(&self, request: &YieldMoveRequest) -> Result<YieldMoveReceipt, YieldError> {
    let chain = self.chain(request.source_chain)?;

    // 1. Route lookup
    let route_request = self.route_request(request);
    let route = self
      .routes
      .get_route(&route_request)
      .await
      .inspect_err(|e| warn!(error = %e, "Route lookup failed"))?;

    // 2. Validation + spender resolution
    let route = route
      .validate()
      .inspect_err(|e| warn!(error = %e, "Route rejected"))?;

    info!(
      to = %route.to,
      spender = %route.spender,
      value = %route.value,
      calldata_len = route.data.len(),
      "Route received"
    );

    // 3. Allowance
    let allowance = ensure_allowance(
      chain.as_ref(),
      self.wallet,
      request.token_in,
      route.spender,
      request.amount,
    )
    .await?;

    // 4. Gas
    let tx = TxRequest::new(self.wallet, route.to, route.data, route.value);
    let gas_limit = chain
      .estimate_gas(&tx)
      .await
      .map_err(|e| YieldError::chain("estimate_gas", &e))?;

    // 5. Submit (not awaited)
    let tx_hash = chain
      .send_transaction(&tx.with_gas(gas_limit))
      .await
      .map_err(|e| YieldError::chain("send_transaction", &e))?;

    info!(tx_hash = %tx_hash, gas_limit, "Route transaction sent");

    Ok(YieldMoveReceipt {
      tx_hash,
      allowance,
      gas_limit,
      spender: route.spender,
      submitted_at: Utc::now(),
    })
  }

  /// Build the aggregator request for a move.
  ///
  /// Cross-chain moves name the wallet as receiver on the destination.
  pub fn route_request(&self, request: &YieldMoveRequest) -> RouteRequest {
    let cross_chain = request.is_cross_chain();

    RouteRequest {
      from_address: self.wallet,
      token_in: vec![request.token_in],
      token_out: vec![request.token_out],
      amount_in: vec![request.amount],
      chain_id: request.source_chain,
      destination_chain_id: if cross_chain { request.destination_chain } else { None },
      receiver: cross_chain.then_some(self.wallet),
    }
  }
}
