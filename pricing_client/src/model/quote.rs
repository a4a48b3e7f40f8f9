//! Loan quote input and result.
//!
//! Results serialize to the JSON shape callers already consume:
//! `{"interestRate": .., "apr": .., "monthlyPayment": ..}`.
use pricing_common::proto::QuoteResponse;
use serde::Serialize;

/// A loan to price. Values are passed to the service as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteInput {
    /// Principal amount.
    pub amount: f64,
    /// Loan term in months.
    pub term_months: i32,
    /// Optional risk score. `None` and `Some(0.0)` mean different things to pricing.
    pub risk_score: Option<f64>,
}

impl QuoteInput {
    /// Creates an input without a risk score.
    pub fn new(amount: f64, term_months: i32) -> Self {
        QuoteInput {
            amount,
            term_months,
            risk_score: None,
        }
    }

    /// Attaches a risk score.
    pub fn with_risk_score(mut self, risk_score: f64) -> Self {
        self.risk_score = Some(risk_score);
        self
    }
}

/// Pricing returned for a successful quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Nominal annual interest rate.
    pub interest_rate: f64,
    /// Annual percentage rate.
    pub apr: f64,
    /// Monthly installment.
    pub monthly_payment: f64,
}

impl From<QuoteResponse> for QuoteResult {
    fn from(resp: QuoteResponse) -> Self {
        QuoteResult {
            interest_rate: resp.interest_rate,
            apr: resp.apr,
            monthly_payment: resp.monthly_payment,
        }
    }
}
