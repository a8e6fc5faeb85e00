//! Chain Adapters - EVM Blockchain Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - ERC-20 reads (allowance, balance, decimals)
//! - Gas estimation and EIP-1559 fee suggestions
//! - Signed submission with nonce/fee fillers
//! - Receipt polling for approvals

pub mod evm;

pub use evm::EvmChainClient;
