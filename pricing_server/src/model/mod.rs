//! Domain models for the pricing server.
//!
//! - `rate` — tiered rate table, quote formula and input rejection reasons.

pub mod rate;
