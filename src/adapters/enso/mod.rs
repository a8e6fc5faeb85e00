//! Enso Routing API Adapter
//!
//! Implements the `RouteProvider` port over the Enso REST API.
//!
//! Sub-modules:
//! - `client`: HTTP client with bearer auth and one-time init
//! - `types`: API request/response type definitions

pub mod client;
pub mod types;

pub use client::{EnsoClient, EnsoClientConfig};
