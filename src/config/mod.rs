//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from `config.toml`. Secrets
//! (wallet, private key, Enso API key) never live in the file: they
//! come from the environment via `credentials`. Token and chain
//! addresses are externalized here, nothing is hardcoded in usecases.

pub mod credentials;
pub mod loader;

use serde::Deserialize;

/// Top-level service configuration.
///
/// Loaded from `config.toml` at startup and validated before the HTTP
/// server binds.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// HTTP server settings.
  #[serde(default)]
  pub server: ServerConfig,
  /// Enso routing API settings.
  #[serde(default)]
  pub enso: EnsoConfig,
  /// Per-chain RPC settings.
  #[serde(default)]
  pub chains: ChainsConfig,
  /// Token contract addresses.
  #[serde(default)]
  pub tokens: TokensConfig,
  /// Yield move parameters.
  #[serde(default, rename = "yield")]
  pub yield_move: YieldConfig,
  /// Fee estimate parameters.
  #[serde(default)]
  pub fees: FeesConfig,
  /// Metrics export.
  #[serde(default)]
  pub metrics: MetricsConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Human-readable service name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Bind host.
  #[serde(default = "default_host")]
  pub host: String,
  /// Bind port. Overridden by the `PORT` env var.
  #[serde(default = "default_port")]
  pub port: u16,
}

/// Enso routing API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsoConfig {
  /// Base URL including the API version.
  #[serde(default = "default_enso_url")]
  pub base_url: String,
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
  /// Project slug used for the yield token lookup.
  #[serde(default = "default_project")]
  pub project: String,
}

/// RPC endpoints for the two chains the router touches.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainsConfig {
  /// Gnosis chain (primary, where aEURe lives).
  #[serde(default = "default_gnosis")]
  pub gnosis: ChainConfig,
  /// Polygon PoS (secondary, bridged EURe).
  #[serde(default = "default_polygon")]
  pub polygon: ChainConfig,
}

/// A single EVM chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
  /// Expected chain id; checked against the RPC at startup.
  pub chain_id: u64,
  /// JSON-RPC endpoint.
  pub rpc_url: String,
  /// Native gas token symbol, for logs.
  pub native_symbol: String,
  /// Receipt polling interval (milliseconds).
  #[serde(default = "default_receipt_poll")]
  pub receipt_poll_ms: u64,
  /// Give up waiting for a receipt after this many seconds.
  #[serde(default = "default_receipt_timeout")]
  pub receipt_timeout_seconds: u64,
}

/// Token contract addresses (checksummed or lowercase hex).
#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
  /// EURe on Gnosis.
  #[serde(default = "default_eure_gnosis")]
  pub eure_gnosis: String,
  /// Aave aEURe on Gnosis.
  #[serde(default = "default_aeure_gnosis")]
  pub aeure_gnosis: String,
  /// EURe on Polygon.
  #[serde(default = "default_eure_polygon")]
  pub eure_polygon: String,
}

/// Yield move parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct YieldConfig {
  /// Amount moved per request, in base units (decimal string).
  #[serde(default = "default_amount")]
  pub amount: String,
}

/// Fee estimate parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct FeesConfig {
  /// Gas units assumed for a cross-chain route transaction.
  #[serde(default = "default_gas_units")]
  pub estimated_gas_units: u64,
}

/// Metrics configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
  /// Expose `/metrics`.
  #[serde(default = "default_true")]
  pub enabled: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      host: default_host(),
      port: default_port(),
    }
  }
}

impl Default for EnsoConfig {
  fn default() -> Self {
    Self {
      base_url: default_enso_url(),
      timeout_seconds: default_timeout(),
      project: default_project(),
    }
  }
}

impl Default for ChainsConfig {
  fn default() -> Self {
    Self {
      gnosis: default_gnosis(),
      polygon: default_polygon(),
    }
  }
}

impl Default for TokensConfig {
  fn default() -> Self {
    Self {
      eure_gnosis: default_eure_gnosis(),
      aeure_gnosis: default_aeure_gnosis(),
      eure_polygon: default_eure_polygon(),
    }
  }
}

impl Default for YieldConfig {
  fn default() -> Self {
    Self {
      amount: default_amount(),
    }
  }
}

impl Default for FeesConfig {
  fn default() -> Self {
    Self {
      estimated_gas_units: default_gas_units(),
    }
  }
}

impl Default for MetricsConfig {
  fn default() -> Self {
    Self { enabled: true }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "eure-yield-router".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
  3333
}

fn default_enso_url() -> String {
  "https://api.enso.build/api/v1".to_string()
}

const fn default_timeout() -> u64 {
  30
}

fn default_project() -> String {
  "aave".to_string()
}

fn default_gnosis() -> ChainConfig {
  ChainConfig {
    chain_id: 100,
    rpc_url: "https://rpc.gnosischain.com".to_string(),
    native_symbol: "xDAI".to_string(),
    receipt_poll_ms: default_receipt_poll(),
    receipt_timeout_seconds: default_receipt_timeout(),
  }
}

fn default_polygon() -> ChainConfig {
  ChainConfig {
    chain_id: 137,
    rpc_url: "https://polygon-rpc.com".to_string(),
    native_symbol: "POL".to_string(),
    receipt_poll_ms: default_receipt_poll(),
    receipt_timeout_seconds: default_receipt_timeout(),
  }
}

const fn default_receipt_poll() -> u64 {
  2_000
}

const fn default_receipt_timeout() -> u64 {
  180
}

fn default_eure_gnosis() -> String {
  "0xcB444e90D8198415266c6a2724b7900fb12FC56E".to_string()
}

fn default_aeure_gnosis() -> String {
  "0xEdBC7449a9b594CA4E053D9737EC5Dc4CbCcBfb2".to_string()
}

fn default_eure_polygon() -> String {
  "0x18ec0A6E18E5bc3784fDd3a3634b31245ab704F6".to_string()
}

fn default_amount() -> String {
  "1000000000000000000".to_string() // 1 EURe
}

const fn default_gas_units() -> u64 {
  1_220_582
}

const fn default_true() -> bool {
  true
}
