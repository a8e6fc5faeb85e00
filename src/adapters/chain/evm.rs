//! EVM Chain Client - alloy-rs 0.9 Reads, Estimates and Submission
//!
//! Implements the `ChainClient` port for one EVM chain. Reads go through
//! a plain HTTP provider; writes go through a provider stacked with the
//! recommended fillers (nonce, chain id, EIP-1559 fees) and the local
//! wallet, so only `to`, `data`, `value` and `gas` are set here.
//!
//! Providers are built per call. alloy 0.9's filled provider types are
//! deeply generic, and building one only clones the URL and signer.

use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use alloy::transports::http::reqwest::Url;
use anyhow::{Context, Result, anyhow, bail, ensure};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::config::ChainConfig;
use crate::domain::erc20::{self, IERC20};
use crate::domain::{TxHash, TxRequest};
use crate::ports::chain_client::{ChainClient, FeeSuggestion};

/// Signing client for one EVM chain.
pub struct EvmChainClient {
    /// Chain id this client signs for.
    chain_id: u64,
    /// Native gas token symbol, for logs.
    native_symbol: String,
    /// JSON-RPC endpoint (never logged with secrets).
    rpc_url: Url,
    /// Local wallet signer.
    signer: PrivateKeySigner,
    /// Receipt polling interval.
    receipt_poll: Duration,
    /// Maximum time to wait for a receipt.
    receipt_timeout: Duration,
}

impl EvmChainClient {
    /// Build a client without touching the network.
    pub fn new(config: &ChainConfig, signer: PrivateKeySigner) -> Result<Self> {
        let rpc_url: Url = config
            .rpc_url
            .parse()
            .with_context(|| format!("Invalid RPC URL for chain {}", config.chain_id))?;

        Ok(Self {
            chain_id: config.chain_id,
            native_symbol: config.native_symbol.clone(),
            rpc_url,
            signer,
            receipt_poll: Duration::from_millis(config.receipt_poll_ms),
            receipt_timeout: Duration::from_secs(config.receipt_timeout_seconds),
        })
    }

    /// Build a client and check the RPC reports the configured chain id.
    #[instrument(skip_all, fields(chain_id = config.chain_id))]
    pub async fn connect(config: &ChainConfig, signer: PrivateKeySigner) -> Result<Self> {
        let client = Self::new(config, signer)?;

        let provider = ProviderBuilder::new().on_http(client.rpc_url.clone());
        let reported = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        if reported != config.chain_id {
            bail!(
                "RPC {} reports chain_id={reported}, expected {}",
                config.rpc_url,
                config.chain_id
            );
        }

        info!(
            chain_id = reported,
            native = %client.native_symbol,
            wallet = %client.signer.address(),
            "Connected to chain RPC"
        );

        Ok(client)
    }

    /// Execute an `eth_call` against `to`.
    async fn read(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let provider = ProviderBuilder::new().on_http(self.rpc_url.clone());
        let tx = TransactionRequest::default().with_to(to).with_input(data);
        provider.call(&tx).await.context("eth_call failed")
    }

    fn to_rpc_request(tx: &TxRequest) -> TransactionRequest {
        let request = TransactionRequest::default()
            .with_from(tx.from)
            .with_to(tx.to)
            .with_input(tx.data.clone())
            .with_value(tx.value);

        match tx.gas {
            Some(gas) => request.with_gas_limit(gas),
            None => request,
        }
    }
}

#[async_trait]
impl ChainClient for EvmChainClient {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn wallet(&self) -> Address {
        self.signer.address()
    }

    #[instrument(skip(self), fields(chain_id = self.chain_id))]
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let raw = self
            .read(token, erc20::allowance_calldata(owner, spender))
            .await
            .context("allowance query failed")?;
        let decoded = IERC20::allowanceCall::abi_decode_returns(&raw, true)
            .context("Undecodable allowance return")?;
        Ok(decoded._0)
    }

    #[instrument(skip(self), fields(chain_id = self.chain_id))]
    async fn decimals(&self, token: Address) -> Result<u8> {
        let raw = self
            .read(token, erc20::decimals_calldata())
            .await
            .context("decimals query failed")?;
        let decoded = IERC20::decimalsCall::abi_decode_returns(&raw, true)
            .context("Undecodable decimals return")?;
        Ok(decoded._0)
    }

    #[instrument(skip(self), fields(chain_id = self.chain_id))]
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        let raw = self
            .read(token, erc20::balance_of_calldata(owner))
            .await
            .context("balanceOf query failed")?;
        let decoded = IERC20::balanceOfCall::abi_decode_returns(&raw, true)
            .context("Undecodable balanceOf return")?;
        Ok(decoded._0)
    }

    #[instrument(skip(self, tx), fields(chain_id = self.chain_id, to = %tx.to))]
    async fn estimate_gas(&self, tx: &TxRequest) -> Result<u64> {
        let provider = ProviderBuilder::new().on_http(self.rpc_url.clone());
        let gas = provider
            .estimate_gas(&Self::to_rpc_request(tx))
            .await
            .context("eth_estimateGas failed")?;
        debug!(gas, "Gas estimated");
        Ok(gas)
    }

    #[instrument(skip(self, tx), fields(chain_id = self.chain_id, to = %tx.to, gas = ?tx.gas))]
    async fn send_transaction(&self, tx: &TxRequest) -> Result<TxHash> {
        ensure!(
            tx.from == self.signer.address(),
            "Refusing to send from {}: client signs for {}",
            tx.from,
            self.signer.address()
        );

        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(self.rpc_url.clone());

        let pending = provider
            .send_transaction(Self::to_rpc_request(tx))
            .await
            .context("Failed to send transaction")?;

        let tx_hash = *pending.tx_hash();
        info!(tx_hash = %tx_hash, "Transaction sent");
        Ok(tx_hash)
    }

    #[instrument(skip(self), fields(chain_id = self.chain_id))]
    async fn wait_for_receipt(&self, hash: TxHash) -> Result<()> {
        let provider = ProviderBuilder::new().on_http(self.rpc_url.clone());

        let poll = async {
            loop {
                if let Some(receipt) = provider
                    .get_transaction_receipt(hash)
                    .await
                    .context("eth_getTransactionReceipt failed")?
                {
                    return Ok::<_, anyhow::Error>(receipt);
                }
                tokio::time::sleep(self.receipt_poll).await;
            }
        };

        let receipt = tokio::time::timeout(self.receipt_timeout, poll)
            .await
            .map_err(|_| {
                anyhow!(
                    "Timed out after {}s waiting for {hash}",
                    self.receipt_timeout.as_secs()
                )
            })??;

        ensure!(receipt.status(), "Transaction {hash} reverted");

        info!(
            tx_hash = %hash,
            block = ?receipt.block_number,
            gas_used = %receipt.gas_used,
            "Transaction mined"
        );
        Ok(())
    }

    async fn gas_price(&self) -> Result<u128> {
        let provider = ProviderBuilder::new().on_http(self.rpc_url.clone());
        provider
            .get_gas_price()
            .await
            .context("Failed to query gas price")
    }

    async fn fee_suggestion(&self) -> Result<FeeSuggestion> {
        let provider = ProviderBuilder::new().on_http(self.rpc_url.clone());
        let fees = provider
            .estimate_eip1559_fees(None)
            .await
            .context("Failed to estimate EIP-1559 fees")?;

        Ok(FeeSuggestion {
            max_fee_per_gas: fees.max_fee_per_gas,
            max_priority_fee_per_gas: fees.max_priority_fee_per_gas,
        })
    }
}
