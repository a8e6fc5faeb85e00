//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `RouteProvider`: Swap/bridge route aggregation (Enso)
//! - `ChainClient`: ERC-20 reads, gas estimation, signed submission

pub mod chain_client;
pub mod route_provider;
