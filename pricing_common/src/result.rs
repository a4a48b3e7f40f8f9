//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PricingError`, so functions can simply return `Result<T>`.
use crate::error::PricingError;

/// Workspace-wide `Result` alias with `PricingError` as the default error.
pub type Result<T, E = PricingError> = std::result::Result<T, E>;
