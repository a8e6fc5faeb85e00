//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, applying the `PORT` override,
//! validating all parameters, and providing clear error messages
//! for misconfiguration.

use std::path::Path;

use alloy::primitives::Address;
use anyhow::{Context, Result};

use super::{AppConfig, ChainConfig};
use crate::domain::amount::parse_amount;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - `PORT` is set but not a port number
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let mut config = parse_config(&content)?;
  apply_env_overrides(&mut config, std::env::var("PORT").ok().as_deref())?;
  validate_config(&config)?;

  Ok(config)
}

/// Parse TOML text into an `AppConfig` (every section is optional).
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).with_context(|| "Failed to parse config.toml")
}

/// Apply environment overrides. Only `PORT` is honoured.
pub fn apply_env_overrides(config: &mut AppConfig, port: Option<&str>) -> Result<()> {
  if let Some(port) = port {
    config.server.port = port
      .trim()
      .parse()
      .with_context(|| format!("PORT is not a valid port: {port:?}"))?;
  }
  Ok(())
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Parseable token addresses
/// - A positive integer move amount
/// - Non-empty RPC/API URLs and positive timeouts
/// - Distinct chain ids for Gnosis and Polygon
pub fn validate_config(config: &AppConfig) -> Result<()> {
  // Token validation
  for (name, addr) in [
    ("eure_gnosis", &config.tokens.eure_gnosis),
    ("aeure_gnosis", &config.tokens.aeure_gnosis),
    ("eure_polygon", &config.tokens.eure_polygon),
  ] {
    addr
      .parse::<Address>()
      .with_context(|| format!("tokens.{name} is not an address: {addr}"))?;
  }

  // Amount validation
  let amount = parse_amount(&config.yield_move.amount)
    .with_context(|| "yield.amount must be an unsigned integer in base units")?;
  anyhow::ensure!(!amount.is_zero(), "yield.amount must be positive");

  // Chain validation
  validate_chain("gnosis", &config.chains.gnosis)?;
  validate_chain("polygon", &config.chains.polygon)?;
  anyhow::ensure!(
    config.chains.gnosis.chain_id != config.chains.polygon.chain_id,
    "chains.gnosis and chains.polygon share chain_id {}",
    config.chains.gnosis.chain_id
  );

  // API validation
  anyhow::ensure!(
    !config.enso.base_url.is_empty(),
    "Enso base URL must not be empty"
  );
  anyhow::ensure!(
    config.enso.timeout_seconds > 0,
    "enso.timeout_seconds must be positive"
  );
  anyhow::ensure!(
    config.fees.estimated_gas_units > 0,
    "fees.estimated_gas_units must be positive"
  );

  Ok(())
}

fn validate_chain(name: &str, chain: &ChainConfig) -> Result<()> {
  anyhow::ensure!(
    !chain.rpc_url.is_empty(),
    "chains.{name}.rpc_url must not be empty"
  );
  anyhow::ensure!(
    chain.receipt_poll_ms > 0,
    "chains.{name}.receipt_poll_ms must be positive"
  );
  anyhow::ensure!(
    chain.receipt_timeout_seconds > 0,
    "chains.{name}.receipt_timeout_seconds must be positive"
  );
  Ok(())
}
