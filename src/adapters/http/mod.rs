//! HTTP Surface - axum 0.7 Router
//!
//! Maps each `GET` endpoint onto a use case and renders the result as
//! JSON. Also serves `/live`, `/ready` and `/metrics`.

pub mod handlers;
pub mod responses;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::adapters::metrics::health::liveness;
use crate::ports::chain_client::ChainClient;
use crate::ports::route_provider::RouteProvider;

pub use state::{AppState, ServiceSettings};

/// Build the full router over `state`.
pub fn router<R: RouteProvider, C: ChainClient>(state: Arc<AppState<R, C>>) -> Router {
    let api = Router::new()
        .route("/deposit/enso", get(handlers::deposit::<R, C>))
        .route("/withdraw/enso", get(handlers::withdraw::<R, C>))
        .route("/deposit/enso/pol", get(handlers::deposit_cross_chain::<R, C>))
        .route("/withdraw/enso/pol", get(handlers::withdraw_cross_chain::<R, C>))
        .route("/enso", get(handlers::market::<R, C>))
        .route("/check-balance", get(handlers::check_balance::<R, C>))
        .route("/calculate-gas", get(handlers::calculate_gas::<R, C>));

    let mut app = Router::new()
        .nest("/api/yield", api)
        .route("/live", get(liveness))
        .route("/ready", get(handlers::ready::<R, C>));

    if state.settings.metrics_enabled {
        app = app.route("/metrics", get(handlers::metrics::<R, C>));
    }

    app.with_state(state)
}
