//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (aggregator REST API, EVM JSON-RPC) and hosts
//! the inbound HTTP surface. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `chain`: EVM chain interaction via alloy-rs
//! - `enso`: Enso route aggregator REST client
//! - `http`: axum router and handlers
//! - `metrics`: Prometheus metrics and health probes

pub mod chain;
pub mod enso;
pub mod http;
pub mod metrics;
