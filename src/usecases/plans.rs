//! Yield Plans - Endpoint → Move Request Mapping
//!
//! Resolves the four fixed yield moves the HTTP surface exposes from
//! configuration. Built once at startup, so a bad address or amount
//! fails before the server binds.

use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::domain::amount::parse_amount;
use crate::domain::{Direction, YieldMoveRequest};

/// Parsed token addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBook {
  /// EURe on Gnosis.
  pub eure_gnosis: Address,
  /// aEURe on Gnosis.
  pub aeure_gnosis: Address,
  /// EURe on Polygon.
  pub eure_polygon: Address,
}

/// The four yield moves, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldPlans {
  /// EURe → aEURe on Gnosis.
  pub deposit: YieldMoveRequest,
  /// aEURe → EURe on Gnosis.
  pub withdraw: YieldMoveRequest,
  /// EURe on Polygon → aEURe on Gnosis.
  pub deposit_cross_chain: YieldMoveRequest,
  /// aEURe on Gnosis → EURe on Polygon.
  pub withdraw_cross_chain: YieldMoveRequest,
  /// Token addresses the plans were built from.
  pub tokens: TokenBook,
  /// Amount each move transfers.
  pub amount: U256,
}

impl TokenBook {
  /// Parse token addresses from config.
  pub fn from_config(config: &AppConfig) -> Result<Self> {
    let parse = |name: &str, value: &str| -> Result<Address> {
      value
        .parse()
        .with_context(|| format!("tokens.{name} is not an address: {value}"))
    };

    Ok(Self {
      eure_gnosis: parse("eure_gnosis", &config.tokens.eure_gnosis)?,
      aeure_gnosis: parse("aeure_gnosis", &config.tokens.aeure_gnosis)?,
      eure_polygon: parse("eure_polygon", &config.tokens.eure_polygon)?,
    })
  }
}

impl YieldPlans {
  /// Build all plans from config.
  pub fn from_config(config: &AppConfig) -> Result<Self> {
    let tokens = TokenBook::from_config(config)?;
    let amount = parse_amount(&config.yield_move.amount).context("Invalid yield.amount")?;
    let gnosis = config.chains.gnosis.chain_id;
    let polygon = config.chains.polygon.chain_id;

    Ok(Self {
      deposit: YieldMoveRequest::same_chain(
        Direction::Deposit,
        tokens.eure_gnosis,
        tokens.aeure_gnosis,
        amount,
        gnosis,
      ),
      withdraw: YieldMoveRequest::same_chain(
        Direction::Withdraw,
        tokens.aeure_gnosis,
        tokens.eure_gnosis,
        amount,
        gnosis,
      ),
      deposit_cross_chain: YieldMoveRequest::cross_chain(
        Direction::Deposit,
        tokens.eure_polygon,
        tokens.aeure_gnosis,
        amount,
        polygon,
        gnosis,
      ),
      withdraw_cross_chain: YieldMoveRequest::cross_chain(
        Direction::Withdraw,
        tokens.aeure_gnosis,
        tokens.eure_polygon,
        amount,
        gnosis,
        polygon,
      ),
      tokens,
      amount,
    })
  }
}
