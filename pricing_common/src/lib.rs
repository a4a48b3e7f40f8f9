//!
//! Common types and utilities shared by the pricing server and client.
//!
//! This crate aggregates:
//! - `error` — `RemoteCallError` returned by quote calls and the unified `PricingError`.
//! - `result` — handy `Result<T, PricingError>` alias.
//! - `config` — `ClientConfig` and `TransportSecurity` injected into clients.
//! - `net` — default target, port and endpoint URI helpers.
//! - `proto` — `pricing.v1` messages plus the generated client and server stubs.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod net;
pub mod proto;
pub mod result;

pub use config::{ClientConfig, TransportSecurity};
pub use error::{PricingError, RemoteCallError};
pub use result::Result;
