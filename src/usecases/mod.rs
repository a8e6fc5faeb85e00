//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the service's workflows. Each use case is a self-contained
//! business operation.
//!
//! Use cases:
//! - `allowance_guard`: Approve-if-needed before a route transaction
//! - `YieldMover`: Route → allowance → gas → send orchestration
//! - `balances`: ERC-20 balance + decimals query
//! - `fee_estimator`: Informational native fee estimate
//! - `market_info`: Yield token lookup in the aggregator catalogue
//! - `plans`: The four configured deposit/withdraw moves

pub mod allowance_guard;
pub mod balances;
pub mod fee_estimator;
pub mod market_info;
pub mod plans;
pub mod yield_mover;
