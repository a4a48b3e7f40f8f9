//! Protocol types and stubs for `pricing.v1.PricingService`.
//!
//! The module below is generated from `proto/pricing/v1/pricing.proto` and checked in,
//! so building the workspace does not require `protoc`.
#![allow(missing_docs)]

/// `pricing` package.
pub mod pricing {
    /// Version 1 of the pricing API.
    pub mod v1 {
        include!("pricing.v1.rs");
    }
}

pub use pricing::v1::pricing_service_client::PricingServiceClient;
pub use pricing::v1::pricing_service_server::{PricingService, PricingServiceServer};
pub use pricing::v1::{QuoteRequest, QuoteResponse};
