//! Enso API Request/Response Types
//!
//! Serialization types for the Enso REST API and their conversion
//! into domain routes. Enso encodes amounts either as JSON strings or
//! numbers, and may send empty strings for absent addresses.

use alloy::primitives::{Address, Bytes};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::amount::parse_amount;
use crate::domain::{Route, YieldError};
use crate::ports::route_provider::TokenMetadata;

/// Response of `GET /shortcuts/route`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
  /// Prebuilt transaction. Absent when no route was found.
  pub tx: Option<RouteTx>,
  /// Contract that pulls `tokenIn`, when not `tx.to`.
  pub allowance_target: Option<String>,
  /// Quoted output amount.
  pub amount_out: Option<Value>,
  /// Aggregator gas estimate, informational.
  pub gas: Option<Value>,
  /// Price impact in basis points, informational.
  pub price_impact: Option<Value>,
}

/// Transaction part of a route response.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTx {
  /// Destination (Enso router or delegate).
  pub to: Option<String>,
  /// Hex call data.
  pub data: Option<String>,
  /// Native value, string or number.
  pub value: Option<Value>,
  /// Sender Enso built the transaction for.
  pub from: Option<String>,
}

/// Response of `GET /tokens`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensResponse {
  /// Token listings.
  #[serde(default)]
  pub data: Vec<TokenMetadata>,
}

/// Lowercase phrases Enso uses when no path exists between the tokens.
const NO_ROUTE_PHRASES: [&str; 3] = ["could not find route", "no route", "route not found"];

/// Error body Enso returns on 4xx/5xx.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
  /// Error message.
  pub message: Option<Value>,
  /// HTTP status echoed in the body.
  #[serde(rename = "statusCode")]
  pub status_code: Option<u16>,
}

impl ApiError {
  /// Best-effort message from an error body.
  pub fn describe(body: &str) -> String {
    match serde_json::from_str::<Self>(body) {
      Ok(Self {
        message: Some(Value::String(msg)),
        ..
      }) => msg,
      Ok(Self {
        message: Some(other),
        ..
      }) => other.to_string(),
      _ => body.chars().take(256).collect(),
    }
  }

  /// Whether an error message is Enso's answer for a missing route.
  pub fn is_no_route(message: &str) -> bool {
    let message = message.to_lowercase();
    NO_ROUTE_PHRASES.iter().any(|phrase| message.contains(phrase))
  }
}

impl RouteResponse {
  /// Convert into a domain route.
  ///
  /// Missing `tx` means no route. Missing fields inside `tx` are left
  /// as `None` for the orchestration to reject; fields that are present
  /// but malformed are rejected here.
  pub fn into_route(self) -> Result<Route, YieldError> {
    let tx = self.tx.ok_or(YieldError::RouteUnavailable)?;

    Ok(Route {
      to: parse_address("tx.to", tx.to.as_deref())?,
      data: parse_data(tx.data.as_deref())?,
      value: match non_empty_amount(tx.value.as_ref()) {
        Some(raw) => Some(
          parse_amount(&raw)
            .map_err(|_| YieldError::InvalidRoute(format!("malformed tx.value: {raw}")))?,
        ),
        None => None,
      },
      allowance_target: parse_address("allowanceTarget", self.allowance_target.as_deref())?,
    })
  }
}

fn parse_address(field: &str, raw: Option<&str>) -> Result<Option<Address>, YieldError> {
  match raw.map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => s
      .parse()
      .map(Some)
      .map_err(|_| YieldError::InvalidRoute(format!("malformed {field}: {s}"))),
  }
}

fn parse_data(raw: Option<&str>) -> Result<Option<Bytes>, YieldError> {
  match raw.map(str::trim) {
    None | Some("" | "0x") => Ok(None),
    Some(s) => s
      .parse()
      .map(Some)
      .map_err(|_| YieldError::InvalidRoute("malformed tx.data".to_string())),
  }
}

fn non_empty_amount(raw: Option<&Value>) -> Option<String> {
  match raw? {
    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}
