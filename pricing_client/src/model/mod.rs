//! Data model types exchanged with the pricing service.
//!
//! This module groups the plain values a caller works with:
//! - `quote` — `QuoteInput` handed to the client and `QuoteResult` returned by it.
pub mod quote;
