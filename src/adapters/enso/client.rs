//! Enso HTTP Client - Route Aggregator REST Client
//!
//! Wraps reqwest with bearer authentication for the Enso routing API.
//! The API key is set once via `init`; any call before that fails with
//! `YieldError::NotInitialized`. Requests are not retried.

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::types::{ApiError, RouteResponse, TokensResponse};
use crate::domain::{Route, YieldError};
use crate::ports::route_provider::{ROUTING_STRATEGY, RouteProvider, RouteRequest, TokenMetadata};

/// Configuration for the Enso HTTP client.
#[derive(Debug, Clone)]
pub struct EnsoClientConfig {
  /// Base URL including the version, e.g. `https://api.enso.build/api/v1`.
  pub base_url: String,
  /// Request timeout.
  pub timeout: Duration,
}

impl Default for EnsoClientConfig {
  fn default() -> Self {
    Self {
      base_url: "https://api.enso.build/api/v1".to_string(),
      timeout: Duration::from_secs(30),
    }
  }
}

/// HTTP client for the Enso routing API.
pub struct EnsoClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: EnsoClientConfig,
  /// API key, set once by `init`.
  api_key: OnceLock<String>,
}

impl EnsoClient {
  /// Create an uninitialized client.
  pub fn new(config: EnsoClientConfig) -> anyhow::Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .pool_max_idle_per_host(5)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      http,
      config,
      api_key: OnceLock::new(),
    })
  }

  /// Set the API credential. Returns `false` if it was already set;
  /// the first credential wins.
  pub fn init(&self, api_key: &str) -> bool {
    self.api_key.set(api_key.to_string()).is_ok()
  }

  fn api_key(&self) -> Result<&str, YieldError> {
    self
      .api_key
      .get()
      .map(String::as_str)
      .ok_or(YieldError::NotInitialized)
  }

  /// Query parameters for a route request. Arrays are sent as
  /// repeated keys.
  pub fn route_query(request: &RouteRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
      ("fromAddress", request.from_address.to_string()),
      ("chainId", request.chain_id.to_string()),
      ("routingStrategy", ROUTING_STRATEGY.to_string()),
    ];

    if let Some(dest) = request.destination_chain_id {
      query.push(("destinationChainId", dest.to_string()));
    }
    if let Some(receiver) = request.receiver {
      query.push(("receiver", receiver.to_string()));
    }

    query.extend(request.token_in.iter().map(|t| ("tokenIn", t.to_string())));
    query.extend(request.token_out.iter().map(|t| ("tokenOut", t.to_string())));
    query.extend(request.amount_in.iter().map(|a| ("amountIn", a.to_string())));
    query
  }

  /// Execute an authenticated GET and decode the JSON body.
  ///
  /// 404, or a 4xx whose message says no route exists, maps to
  /// `RouteUnavailable`. Any other non-2xx status, a transport error or
  /// an undecodable body maps to `RouteProvider`.
  async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&'static str, String)],
  ) -> Result<T, YieldError> {
    let api_key = self.api_key()?;
    let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

    let response = self
      .http
      .get(&url)
      .bearer_auth(api_key)
      .query(query)
      .send()
      .await
      .map_err(|e| {
        warn!(error = %e, path, "Enso request failed");
        YieldError::RouteProvider(e.to_string())
      })?;

    let status = response.status();
    debug!(status = %status, path, "Enso response");

    if status == StatusCode::NOT_FOUND {
      return Err(YieldError::RouteUnavailable);
    }

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      let message = ApiError::describe(&body);
      warn!(status = %status, error = %message, path, "Enso API error");

      if status.is_client_error() && ApiError::is_no_route(&message) {
        return Err(YieldError::RouteUnavailable);
      }
      return Err(YieldError::RouteProvider(format!("{status}: {message}")));
    }

    response
      .json::<T>()
      .await
      .map_err(|e| YieldError::RouteProvider(format!("undecodable response: {e}")))
  }
}

#[async_trait]
impl RouteProvider for EnsoClient {
  #[instrument(skip(self, request), fields(chain_id = request.chain_id, destination = ?request.destination_chain_id))]
  async fn get_route(&self, request: &RouteRequest) -> Result<Route, YieldError> {
    let response: RouteResponse = self
      .get_json("/shortcuts/route", &Self::route_query(request))
      .await?;

    debug!(
      amount_out = ?response.amount_out,
      gas = ?response.gas,
      price_impact = ?response.price_impact,
      "Route quote"
    );

    response.into_route()
  }

  #[instrument(skip(self))]
  async fn list_tokens(
    &self,
    project: &str,
    chain_id: u64,
  ) -> Result<Vec<TokenMetadata>, YieldError> {
    let query = [
      ("project", project.to_string()),
      ("chainId", chain_id.to_string()),
    ];
    let response: TokensResponse = self.get_json("/tokens", &query).await?;
    Ok(response.data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloy::primitives::{Address, U256};

  fn request(cross_chain: bool) -> RouteRequest {
    RouteRequest {
      from_address: Address::repeat_byte(0x01),
      token_in: vec![Address::repeat_byte(0x02)],
      token_out: vec![Address::repeat_byte(0x03)],
      amount_in: vec![U256::from(1_000_000_000_000_000_000u128)],
      chain_id: if cross_chain { 137 } else { 100 },
      destination_chain_id: cross_chain.then_some(100),
      receiver: cross_chain.then_some(Address::repeat_byte(0x01)),
    }
  }

  #[test]
  fn test_same_chain_query() {
    let query = EnsoClient::route_query(&request(false));
    let keys: Vec<_> = query.iter().map(|(k, _)| *k).collect();
    assert_eq!(
      keys,
      ["fromAddress", "chainId", "routingStrategy", "tokenIn", "tokenOut", "amountIn"]
    );
    assert!(query.contains(&("routingStrategy", "router".to_string())));
    assert!(query.contains(&("amountIn", "1000000000000000000".to_string())));
  }

  #[test]
  fn test_cross_chain_query() {
    let query = EnsoClient::route_query(&request(true));
    assert!(query.contains(&("chainId", "137".to_string())));
    assert!(query.contains(&("destinationChainId", "100".to_string())));
    assert!(query.iter().any(|(k, _)| *k == "receiver"));
  }

  #[tokio::test]
  async fn test_uninitialized_client_fails() {
    let client = EnsoClient::new(EnsoClientConfig::default()).unwrap();

    let err = client.get_route(&request(false)).await.unwrap_err();
    assert!(matches!(err, YieldError::NotInitialized));

    let err = client.list_tokens("aave", 100).await.unwrap_err();
    assert!(matches!(err, YieldError::NotInitialized));
  }

  #[test]
  fn test_init_once() {
    let client = EnsoClient::new(EnsoClientConfig::default()).unwrap();
    assert!(client.init("first"));
    assert!(!client.init("second"));
    assert_eq!(client.api_key().unwrap(), "first");
  }
}
