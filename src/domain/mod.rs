//! Domain layer - Core types and rules.
//!
//! Pure logic for yield routing: routes, allowances, amounts and the
//! error taxonomy. Nothing here performs I/O; alloy is used only for
//! its primitive types and ABI encoding.

pub mod amount;
pub mod erc20;
pub mod error;
pub mod route;
pub mod transaction;
pub mod yield_move;

// Re-export core types for convenience
pub use error::YieldError;
pub use route::{Route, ValidatedRoute};
pub use transaction::{TxHash, TxRequest};
pub use yield_move::{AllowanceOutcome, Direction, YieldMoveReceipt, YieldMoveRequest};
