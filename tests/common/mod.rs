//! Shared mocks and fixtures for integration tests.

#![allow(dead_code)]

use alloy::primitives::{Address, Bytes, TxHash, U256};
use mockall::mock;

use eure_yield_router::config::AppConfig;
use eure_yield_router::config::loader::parse_config;
use eure_yield_router::domain::{Route, TxRequest, YieldError};
use eure_yield_router::ports::chain_client::{ChainClient, FeeSuggestion};
use eure_yield_router::ports::route_provider::{RouteProvider, RouteRequest, TokenMetadata};
use eure_yield_router::usecases::plans::YieldPlans;

// ---- Mock Definitions ----

mock! {
    pub Routes {}

    #[async_trait::async_trait]
    impl RouteProvider for Routes {
        async fn get_route(&self, request: &RouteRequest) -> Result<Route, YieldError>;

        async fn list_tokens(
            &self,
            project: &str,
            chain_id: u64,
        ) -> Result<Vec<TokenMetadata>, YieldError>;
    }
}

mock! {
    pub Chain {}

    #[async_trait::async_trait]
    impl ChainClient for Chain {
        fn chain_id(&self) -> u64;
        fn wallet(&self) -> Address;
        async fn allowance(&self, token: Address, owner: Address, spender: Address)
            -> anyhow::Result<U256>;
        async fn decimals(&self, token: Address) -> anyhow::Result<u8>;
        async fn balance_of(&self, token: Address, owner: Address) -> anyhow::Result<U256>;
        async fn estimate_gas(&self, tx: &TxRequest) -> anyhow::Result<u64>;
        async fn send_transaction(&self, tx: &TxRequest) -> anyhow::Result<TxHash>;
        async fn wait_for_receipt(&self, hash: TxHash) -> anyhow::Result<()>;
        async fn gas_price(&self) -> anyhow::Result<u128>;
        async fn fee_suggestion(&self) -> anyhow::Result<FeeSuggestion>;
    }
}

// ---- Fixtures ----

pub const GNOSIS: u64 = 100;
pub const POLYGON: u64 = 137;

pub fn wallet() -> Address {
    Address::repeat_byte(0x0a)
}

pub fn router_address() -> Address {
    Address::repeat_byte(0x80)
}

pub fn allowance_target() -> Address {
    Address::repeat_byte(0x77)
}

pub fn one_token() -> U256 {
    U256::from(1_000_000_000_000_000_000u128)
}

pub fn route_calldata() -> Bytes {
    Bytes::from(vec![0xb3, 0x5d, 0x7e, 0x73, 0x01, 0x02])
}

pub fn approve_hash() -> TxHash {
    TxHash::repeat_byte(0xa1)
}

pub fn route_hash() -> TxHash {
    TxHash::repeat_byte(0xb2)
}

/// Default configuration, no file needed.
pub fn config() -> AppConfig {
    parse_config("").unwrap()
}

pub fn plans() -> YieldPlans {
    YieldPlans::from_config(&config()).unwrap()
}

/// A route with destination, call data and no allowance target.
pub fn route() -> Route {
    Route {
        to: Some(router_address()),
        data: Some(route_calldata()),
        value: Some(U256::ZERO),
        allowance_target: None,
    }
}

/// A chain mock answering identity queries only.
pub fn chain(chain_id: u64) -> MockChain {
    let mut chain = MockChain::new();
    chain.expect_chain_id().return_const(chain_id);
    chain.expect_wallet().return_const(wallet());
    chain
}

/// A chain mock that must not see any read or write.
pub fn untouched_chain(chain_id: u64) -> MockChain {
    let mut chain = chain(chain_id);
    chain.expect_allowance().never();
    chain.expect_estimate_gas().never();
    chain.expect_send_transaction().never();
    chain.expect_wait_for_receipt().never();
    chain
}

/// Catalogue entry for the Gnosis aEURe token.
pub fn aeure_listing(address: &str) -> TokenMetadata {
    TokenMetadata {
        name: Some("Aave Gnosis EURe".to_string()),
        chain_id: GNOSIS,
        address: address.to_string(),
        decimals: Some(18),
        token_type: Some("defi".to_string()),
        project: Some("aave".to_string()),
        protocol: Some("aave-v3".to_string()),
        underlying_tokens: None,
        primary_address: None,
        apy: Some(3.21),
        apy_base: Some(3.21),
        apy_reward: None,
        tvl: Some(12_345_678.9),
    }
}
