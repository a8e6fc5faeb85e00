//! Integration Tests - HTTP Surface
//!
//! Serves the axum router on an ephemeral port over mocked ports and
//! calls it with reqwest, checking status codes and JSON shapes.

mod common;

use std::sync::Arc;

use alloy::primitives::U256;
use serde_json::{Value, json};

use common::*;
use eure_yield_router::adapters::http::{AppState, ServiceSettings, router};
use eure_yield_router::adapters::metrics::{HealthState, MetricsRegistry};
use eure_yield_router::domain::YieldError;
use eure_yield_router::ports::chain_client::FeeSuggestion;
use eure_yield_router::usecases::yield_mover::YieldMover;

struct TestServer {
    base: String,
    health: HealthState,
    http: reqwest::Client,
}

impl TestServer {
    async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .http
            .get(format!("{}{path}", self.base))
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }

    async fn get_text(&self, path: &str) -> (u16, String) {
        let response = self
            .http
            .get(format!("{}{path}", self.base))
            .send()
            .await
            .unwrap();
        (response.status().as_u16(), response.text().await.unwrap())
    }
}

async fn spawn(routes: MockRoutes, gnosis: MockChain, polygon: MockChain) -> TestServer {
    let config = config();
    let health = HealthState::new();
    let state = AppState {
        mover: YieldMover::new(
            Arc::new(routes),
            [Arc::new(gnosis), Arc::new(polygon)],
            wallet(),
        )
        .unwrap(),
        plans: plans(),
        settings: ServiceSettings::from_config(&config),
        metrics: Arc::new(MetricsRegistry::new().unwrap()),
        health: health.clone(),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(Arc::new(state))).await.unwrap();
    });

    TestServer {
        base: format!("http://{address}"),
        health,
        http: reqwest::Client::new(),
    }
}

fn route_only(times: usize) -> MockRoutes {
    let mut routes = MockRoutes::new();
    routes
        .expect_get_route()
        .times(times)
        .returning(|_| Ok(route()));
    routes
}

fn sending_chain(chain_id: u64) -> MockChain {
    let mut chain = chain(chain_id);
    chain.expect_allowance().returning(|_, _, _| Ok(U256::MAX));
    chain.expect_estimate_gas().returning(|_| Ok(400_000));
    chain
        .expect_send_transaction()
        .returning(|_| Ok(route_hash()));
    chain
}

// ---- Move endpoints ----

#[tokio::test]
async fn test_deposit_returns_hash() {
    let server = spawn(route_only(1), sending_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/deposit/enso").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "success": true, "hash": route_hash().to_string() })
    );
}

#[tokio::test]
async fn test_withdraw_returns_hash() {
    let server = spawn(route_only(1), sending_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/withdraw/enso").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], json!(true));
    assert!(body["hash"].is_string());
}

#[tokio::test]
async fn test_cross_chain_deposit_omits_hash() {
    let server = spawn(route_only(1), untouched_chain(GNOSIS), sending_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/deposit/enso/pol").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_cross_chain_withdraw_omits_hash() {
    let server = spawn(route_only(1), sending_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/withdraw/enso/pol").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_missing_route_is_500() {
    let mut routes = MockRoutes::new();
    routes
        .expect_get_route()
        .returning(|_| Err(YieldError::RouteUnavailable));
    let server = spawn(routes, untouched_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/deposit/enso").await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Failed to fetch Enso route" }));
}

#[tokio::test]
async fn test_provider_failure_hides_upstream_body() {
    let mut routes = MockRoutes::new();
    routes.expect_get_route().returning(|_| {
        Err(YieldError::RouteProvider(
            "502 Bad Gateway: <html>upstream 10.0.0.7</html>".to_string(),
        ))
    });
    let server = spawn(routes, untouched_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/deposit/enso/pol").await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Enso request failed" }));
}

#[tokio::test]
async fn test_chain_failure_is_500_with_message() {
    let mut gnosis = chain(GNOSIS);
    gnosis
        .expect_allowance()
        .returning(|_, _, _| Err(anyhow::anyhow!("connection refused")));
    let server = spawn(route_only(1), gnosis, untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/withdraw/enso").await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "allowance failed: connection refused" }));
}

// ---- Read-only endpoints ----

#[tokio::test]
async fn test_market_lookup_returns_listing() {
    let aeure = plans().tokens.aeure_gnosis;
    let mut routes = MockRoutes::new();
    routes
        .expect_list_tokens()
        .withf(|project, chain_id| project == "aave" && *chain_id == GNOSIS)
        .times(1)
        .returning(move |_, _| Ok(vec![aeure_listing(&aeure.to_string().to_lowercase())]));
    let server = spawn(routes, untouched_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/enso").await;

    assert_eq!(status, 200);
    assert_eq!(body["name"], json!("Aave Gnosis EURe"));
    assert_eq!(body["chainId"], json!(100));
    assert_eq!(body["type"], json!("defi"));
    assert_eq!(body["apy"], json!(3.21));
}

#[tokio::test]
async fn test_market_lookup_failure_is_500() {
    let mut routes = MockRoutes::new();
    routes.expect_list_tokens().returning(|_, _| Ok(Vec::new()));
    let server = spawn(routes, untouched_chain(GNOSIS), untouched_chain(POLYGON)).await;

    let (status, body) = server.get("/api/yield/enso").await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Failed to fetch Enso data" }));
}

#[tokio::test]
async fn test_check_balance_reads_polygon_and_hides_value() {
    let eure_polygon = plans().tokens.eure_polygon;
    let mut polygon = untouched_chain(POLYGON);
    polygon
        .expect_decimals()
        .withf(move |token| *token == eure_polygon)
        .times(1)
        .returning(|_| Ok(18));
    polygon
        .expect_balance_of()
        .times(1)
        .returning(|_, _| Ok(U256::from(5_000_000_000_000_000_000u128)));
    let server = spawn(MockRoutes::new(), untouched_chain(GNOSIS), polygon).await;

    let (status, body) = server.get("/api/yield/check-balance").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_calculate_gas() {
    let mut polygon = chain(POLYGON);
    polygon.expect_gas_price().returning(|| Ok(278_500_000_000));
    polygon.expect_fee_suggestion().returning(|| {
        Ok(FeeSuggestion {
            max_fee_per_gas: 300_000_000_000,
            max_priority_fee_per_gas: 30_000_000_000,
        })
    });
    let server = spawn(MockRoutes::new(), untouched_chain(GNOSIS), polygon).await;

    let (status, body) = server.get("/api/yield/calculate-gas").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "message": "success" }));
}

#[tokio::test]
async fn test_calculate_gas_failure_is_400() {
    let mut polygon = chain(POLYGON);
    polygon
        .expect_gas_price()
        .returning(|| Err(anyhow::anyhow!("rate limited")));
    let server = spawn(MockRoutes::new(), untouched_chain(GNOSIS), polygon).await;

    let (status, body) = server.get("/api/yield/calculate-gas").await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "gas_price failed: rate limited" }));
}

// ---- Probes and metrics ----

#[tokio::test]
async fn test_readiness_follows_shutdown() {
    let server = spawn(MockRoutes::new(), chain(GNOSIS), chain(POLYGON)).await;

    assert_eq!(server.get_text("/live").await.0, 200);
    assert_eq!(server.get_text("/ready").await, (200, "READY".to_string()));

    server.health.mark_shutting_down();

    assert_eq!(server.get_text("/ready").await.0, 503);
    assert_eq!(server.get_text("/live").await.0, 200);
}

#[tokio::test]
async fn test_metrics_count_moves() {
    let mut routes = MockRoutes::new();
    let mut first = true;
    routes.expect_get_route().times(2).returning(move |_| {
        if std::mem::take(&mut first) {
            Ok(route())
        } else {
            Err(YieldError::RouteUnavailable)
        }
    });

    let mut gnosis = chain(GNOSIS);
    gnosis.expect_allowance().returning(|_, _, _| Ok(U256::ZERO));
    gnosis
        .expect_send_transaction()
        .times(2)
        .returning(|tx| {
            if tx.gas.is_some() {
                Ok(route_hash())
            } else {
                Ok(approve_hash())
            }
        });
    gnosis.expect_wait_for_receipt().returning(|_| Ok(()));
    gnosis.expect_estimate_gas().returning(|_| Ok(400_000));
    let server = spawn(routes, gnosis, untouched_chain(POLYGON)).await;

    assert_eq!(server.get("/api/yield/deposit/enso").await.0, 200);
    assert_eq!(server.get("/api/yield/deposit/enso").await.0, 500);

    let (status, text) = server.get_text("/metrics").await;
    assert_eq!(status, 200);
    assert!(text.contains(r#"yield_router_moves_total{endpoint="deposit",outcome="success"} 1"#));
    assert!(text.contains(
        r#"yield_router_moves_total{endpoint="deposit",outcome="route_unavailable"} 1"#
    ));
    assert!(text.contains(r#"yield_router_approvals_total{chain="100"} 1"#));
}
