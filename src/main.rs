//! EURe Yield Router - Entry Point
//!
//! Initializes configuration, logging, the aggregator client and chain
//! clients, then serves the HTTP surface until SIGINT.
//!
//! Wiring sequence:
//! 1. Load `.env` (if any), config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Load wallet + Enso credentials from env (WALLET_ADDRESS, PRIVATE_KEY, ENSO_API_KEY)
//! 4. Create EnsoClient and set its API key
//! 5. Connect Gnosis + Polygon clients (chain id checked against config)
//! 6. Build yield plans, metrics registry and shared state
//! 7. Serve axum router on server.host:server.port
//! 8. Wait for SIGINT → readiness 503 → drain in-flight requests → exit

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use eure_yield_router::adapters::chain::EvmChainClient;
use eure_yield_router::adapters::enso::{EnsoClient, EnsoClientConfig};
use eure_yield_router::adapters::http::{self, AppState, ServiceSettings};
use eure_yield_router::adapters::metrics::{HealthState, MetricsRegistry};
use eure_yield_router::config;
use eure_yield_router::config::credentials::Credentials;
use eure_yield_router::usecases::plans::YieldPlans;
use eure_yield_router::usecases::yield_mover::YieldMover;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load .env and configuration ──────────────────────
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to read .env");
        }
    }

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.server.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.server.name,
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        "Starting EURe Yield Router"
    );
    info!(
        config_path = %config_path,
        gnosis_rpc = %config.chains.gnosis.rpc_url,
        polygon_rpc = %config.chains.polygon.rpc_url,
        amount = %config.yield_move.amount,
        "Configuration loaded"
    );

    // ── 3. Load credentials from env vars ───────────────────
    let credentials =
        Credentials::from_env().context("Failed to load credentials from env")?;

    // ── 4. Create Enso client and set its API key ───────────
    let enso = Arc::new(
        EnsoClient::new(EnsoClientConfig {
            base_url: config.enso.base_url.clone(),
            timeout: Duration::from_secs(config.enso.timeout_seconds),
        })
        .context("Failed to create Enso client")?,
    );
    enso.init(credentials.enso_api_key());

    // ── 5. Connect chain clients ────────────────────────────
    let gnosis = EvmChainClient::connect(&config.chains.gnosis, credentials.signer())
        .await
        .context("Failed to connect Gnosis RPC")?;
    let polygon = EvmChainClient::connect(&config.chains.polygon, credentials.signer())
        .await
        .context("Failed to connect Polygon RPC")?;

    // ── 6. Plans, metrics, shared state ─────────────────────
    let plans = YieldPlans::from_config(&config).context("Failed to build yield plans")?;
    let metrics = Arc::new(MetricsRegistry::new().context("Failed to create metrics")?);
    let health = HealthState::new();

    let mover = YieldMover::new(
        enso,
        [Arc::new(gnosis), Arc::new(polygon)],
        credentials.wallet(),
    )
    .context("Failed to build yield mover")?;

    info!(
        wallet = %mover.wallet(),
        amount = %plans.amount,
        "Yield mover ready"
    );

    let state = Arc::new(AppState {
        mover,
        plans,
        settings: ServiceSettings::from_config(&config),
        metrics,
        health: health.clone(),
    });

    // ── 7. Serve HTTP ───────────────────────────────────────
    let app = http::router(state);
    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "HTTP server listening");

    // ── 8. Graceful shutdown on SIGINT ──────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for SIGINT");
            }
            info!("SIGINT received, draining in-flight requests");
            health.mark_shutting_down();
        })
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}
