//! Client-side adapter for the `pricing.v1.PricingService` gRPC API.
//!
//! A caller hands in a `QuoteInput` and gets back either a `QuoteResult` or a
//! `RemoteCallError` carrying the gRPC status code and message. The crate is layered:
//!
//! - `request` — builds the wire `QuoteRequest`, keeping risk score presence intact.
//! - `client` — `PricingClient`, the async call executor over one tonic channel.
//! - `blocking` — `BlockingPricingClient`, the same executor for synchronous callers.
//! - `model` — plain input and result values.
//!
//! ```no_run
//! use pricing_client::{BlockingPricingClient, ClientConfig, QuoteInput};
//!
//! let client = BlockingPricingClient::connect(&ClientConfig::new("127.0.0.1:50051"))?;
//! let result = client.quote(&QuoteInput::new(10_000.0, 24))?;
//! println!("{}", result.monthly_payment);
//! # Ok::<(), pricing_client::PricingError>(())
//! ```
#![warn(missing_docs)]
pub mod blocking;
pub mod client;
pub mod model;
pub mod request;

pub use blocking::BlockingPricingClient;
pub use client::PricingClient;
pub use model::quote::{QuoteInput, QuoteResult};
pub use pricing_common::{ClientConfig, PricingError, RemoteCallError, TransportSecurity};
