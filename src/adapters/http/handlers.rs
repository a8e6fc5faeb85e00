//! Route handlers.
//!
//! The four move handlers share `run_move`; they differ only in the plan
//! they execute and whether the hash is returned. Every failure becomes
//! `{"error": ...}` with 500, except `/calculate-gas` which uses 400.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info, warn};

use super::responses::{ApiError, MessageResponse, MoveResponse};
use super::state::AppState;
use crate::adapters::metrics::health::readiness_of;
use crate::domain::{AllowanceOutcome, YieldMoveRequest};
use crate::ports::chain_client::ChainClient;
use crate::ports::route_provider::{RouteProvider, TokenMetadata};
use crate::usecases::balances::get_token_balance;
use crate::usecases::fee_estimator::estimate_native_fee;
use crate::usecases::market_info::find_yield_token;

type AppStateRef<R, C> = State<Arc<AppState<R, C>>>;

/// `GET /api/yield/deposit/enso`
pub async fn deposit<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<MoveResponse>, ApiError> {
    run_move(&state, "deposit", &state.plans.deposit, true).await
}

/// `GET /api/yield/withdraw/enso`
pub async fn withdraw<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<MoveResponse>, ApiError> {
    run_move(&state, "withdraw", &state.plans.withdraw, true).await
}

/// `GET /api/yield/deposit/enso/pol`
pub async fn deposit_cross_chain<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<MoveResponse>, ApiError> {
    run_move(&state, "deposit_pol", &state.plans.deposit_cross_chain, false).await
}

/// `GET /api/yield/withdraw/enso/pol`
pub async fn withdraw_cross_chain<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<MoveResponse>, ApiError> {
    run_move(&state, "withdraw_pol", &state.plans.withdraw_cross_chain, false).await
}

async fn run_move<R: RouteProvider, C: ChainClient>(
    state: &AppState<R, C>,
    endpoint: &'static str,
    plan: &YieldMoveRequest,
    with_hash: bool,
) -> Result<Json<MoveResponse>, ApiError> {
    let started = Instant::now();

    match state.mover.execute(endpoint, plan).await {
        Ok(receipt) => {
            if matches!(receipt.allowance, AllowanceOutcome::Approved { .. }) {
                state.metrics.record_approval(plan.source_chain);
            }
            info!(
                endpoint,
                tx_hash = %receipt.tx_hash,
                submitted_at = %receipt.submitted_at.to_rfc3339(),
                "Yield move submitted"
            );
            state
                .metrics
                .record_move(endpoint, "success", started.elapsed());

            Ok(Json(MoveResponse {
                success: true,
                hash: with_hash.then(|| receipt.tx_hash.to_string()),
            }))
        }
        Err(e) => {
            error!(endpoint, error = %e, kind = e.kind(), "Yield move failed");
            state
                .metrics
                .record_move(endpoint, e.kind(), started.elapsed());
            Err(e.into())
        }
    }
}

/// `GET /api/yield/enso`: catalogue entry of the yield token.
pub async fn market<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<TokenMetadata>, ApiError> {
    let settings = &state.settings;

    find_yield_token(
        state.mover.routes().as_ref(),
        &settings.project,
        settings.market_chain_id,
        state.plans.tokens.aeure_gnosis,
    )
    .await
    .map(Json)
    .map_err(|e| {
        warn!(error = %e, "Yield token lookup failed");
        ApiError::internal("Failed to fetch Enso data")
    })
}

/// `GET /api/yield/check-balance`: logs the wallet's EURe balance.
///
/// The balance is deliberately not part of the response.
pub async fn check_balance<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<MoveResponse>, ApiError> {
    let chain = state.mover.chain(state.settings.balance_chain_id)?;
    let token = state.plans.tokens.eure_polygon;

    let balance = get_token_balance(chain.as_ref(), token, state.mover.wallet())
        .await
        .inspect_err(|e| error!(error = %e, "Balance query failed"))?;

    info!(
        token = %token,
        balance = %balance.balance,
        decimals = balance.decimals,
        display = ?balance.display().ok(),
        "Token balance"
    );

    Ok(Json(MoveResponse {
        success: true,
        hash: None,
    }))
}

/// `GET /api/yield/calculate-gas`: logs a native fee estimate.
pub async fn calculate_gas<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<Json<MessageResponse>, ApiError> {
    let chain = state
        .mover
        .chain(state.settings.fee_chain_id)
        .map_err(|e| ApiError::bad_request(&e))?;

    estimate_native_fee(chain.as_ref(), state.settings.gas_units)
        .await
        .map_err(|e| {
            error!(error = %e, "Fee estimate failed");
            ApiError::bad_request(&e)
        })?;

    Ok(Json(MessageResponse { message: "success" }))
}

/// `GET /ready`
pub async fn ready<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> impl IntoResponse {
    readiness_of(&state.health)
}

/// `GET /metrics`
pub async fn metrics<R: RouteProvider, C: ChainClient>(
    State(state): AppStateRef<R, C>,
) -> Result<String, (StatusCode, String)> {
    state.metrics.encode().map_err(|e| {
        warn!(error = %e, "Metrics encoding failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}
