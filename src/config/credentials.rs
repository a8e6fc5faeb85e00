//! Wallet and API Credentials - Environment Loading
//!
//! Reads WALLET_ADDRESS, PRIVATE_KEY and ENSO_API_KEY once at startup
//! and fails fast if any is missing or malformed. The resulting value
//! is passed explicitly to the components that need it.

use std::fmt;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result, ensure};

/// Signing identity plus the routing API credential.
///
/// `Debug` never prints the key or the API credential.
#[derive(Clone)]
pub struct Credentials {
    /// Wallet address; equals the signer's derived address.
    wallet: Address,
    /// Local private key signer.
    signer: PrivateKeySigner,
    /// Enso API key.
    enso_api_key: String,
}

impl Credentials {
    /// Load credentials from environment variables.
    ///
    /// Required env vars: WALLET_ADDRESS, PRIVATE_KEY, ENSO_API_KEY.
    /// These MUST be set in `.env` or the process environment (never
    /// committed to git).
    pub fn from_env() -> Result<Self> {
        let wallet = std::env::var("WALLET_ADDRESS").context("WALLET_ADDRESS not set")?;
        let private_key = std::env::var("PRIVATE_KEY").context("PRIVATE_KEY not set")?;
        let enso_api_key = std::env::var("ENSO_API_KEY").context("ENSO_API_KEY not set")?;

        Self::new(&wallet, &private_key, &enso_api_key)
    }

    /// Validate and assemble credentials from raw strings.
    ///
    /// The private key may be given with or without a `0x` prefix.
    pub fn new(wallet: &str, private_key: &str, enso_api_key: &str) -> Result<Self> {
        let wallet: Address = wallet.trim().parse().context("Invalid WALLET_ADDRESS")?;

        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);
        let signer: PrivateKeySigner = key.parse().context("Invalid PRIVATE_KEY")?;

        ensure!(
            signer.address() == wallet,
            "PRIVATE_KEY derives {} but WALLET_ADDRESS is {}",
            signer.address(),
            wallet
        );

        let enso_api_key = enso_api_key.trim().to_string();
        ensure!(!enso_api_key.is_empty(), "ENSO_API_KEY is empty");

        Ok(Self {
            wallet,
            signer,
            enso_api_key,
        })
    }

    /// The wallet every move is signed by.
    pub const fn wallet(&self) -> Address {
        self.wallet
    }

    /// The local signer, for chain clients.
    pub fn signer(&self) -> PrivateKeySigner {
        self.signer.clone()
    }

    /// The Enso API key, for the route provider.
    pub fn enso_api_key(&self) -> &str {
        &self.enso_api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("wallet", &self.wallet)
            .field("signer", &"<redacted>")
            .field("enso_api_key", &"<redacted>")
            .finish()
    }
}
