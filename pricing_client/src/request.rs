//! Builds `pricing.v1.QuoteRequest` values.
//!
//! Amount and term are copied without validation. The risk score is only put on the
//! wire when one was supplied: proto3 `optional` keeps "unset" distinct from `0.0`.
use pricing_common::proto::QuoteRequest;

use crate::model::quote::QuoteInput;

/// Builds the outgoing request.
pub fn build(amount: f64, term_months: i32, risk_score: Option<f64>) -> QuoteRequest {
    QuoteRequest {
        amount,
        term_months,
        risk_score,
    }
}

impl QuoteInput {
    /// Wire request for this input.
    pub fn to_request(&self) -> QuoteRequest {
        build(self.amount, self.term_months, self.risk_score)
    }
}
