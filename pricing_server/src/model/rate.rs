//! Tiered loan pricing.
//!
//! The reference pricing rules:
//!
//! - `RateTable::rate_for(amount)` — base rate, or the large-loan rate once the amount
//!   is strictly above the threshold.
//! - `RateTable::price(amount, term_months)` — full quote: rate, APR (rate plus a fixed
//!   spread) and a monthly payment of one month's interest on the principal plus a
//!   straight-line share of the principal.
//!
//! The risk score is not part of the formula.

use thiserror::Error;

/// Why a loan could not be priced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingRejection {
    /// Amount is zero, negative, NaN or infinite.
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    /// Term is zero or negative.
    #[error("term_months must be positive, got {0}")]
    InvalidTerm(i32),
}

/// Computed pricing for one loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    /// Nominal annual rate.
    pub interest_rate: f64,
    /// Annual percentage rate.
    pub apr: f64,
    /// Monthly installment.
    pub monthly_payment: f64,
}

/// Rate tiers used to price loans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    /// Rate for amounts up to and including `large_loan_threshold`.
    pub base_rate: f64,
    /// Rate for amounts above `large_loan_threshold`.
    pub large_loan_rate: f64,
    /// Amount above which `large_loan_rate` applies.
    pub large_loan_threshold: f64,
    /// Added to the rate to get the APR.
    pub apr_spread: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            base_rate: 0.049,
            large_loan_rate: 0.059,
            large_loan_threshold: 20_000.0,
            apr_spread: 0.005,
        }
    }
}

impl RateTable {
    /// Rate tier for `amount`.
    pub fn rate_for(&self, amount: f64) -> f64 {
        if amount > self.large_loan_threshold {
            self.large_loan_rate
        } else {
            self.base_rate
        }
    }

    /// Prices a loan, rejecting amounts and terms the formula cannot handle.
    pub fn price(&self, amount: f64, term_months: i32) -> Result<Pricing, PricingRejection> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PricingRejection::InvalidAmount(amount));
        }
        if term_months <= 0 {
            return Err(PricingRejection::InvalidTerm(term_months));
        }

        let rate = self.rate_for(amount);
        let monthly = (amount * rate / 12.0) + (amount / f64::from(term_months));
        Ok(Pricing {
            interest_rate: rate,
            apr: rate + self.apr_spread,
            monthly_payment: monthly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reference_quote() {
        let pricing = RateTable::default().price(10_000.0, 24).unwrap();
        assert_eq!(pricing.interest_rate, 0.049);
        assert!(close(pricing.apr, 0.054));
        assert!(close(pricing.monthly_payment, 457.5));
    }

    #[test]
    fn threshold_is_exclusive() {
        let table = RateTable::default();
        assert_eq!(table.rate_for(20_000.0), 0.049);
        assert_eq!(table.rate_for(20_000.01), 0.059);
    }

    #[test]
    fn large_loan_uses_higher_rate() {
        let pricing = RateTable::default().price(24_000.0, 48).unwrap();
        assert_eq!(pricing.interest_rate, 0.059);
        assert!(close(pricing.apr, 0.064));
        assert!(close(pricing.monthly_payment, 24_000.0 * 0.059 / 12.0 + 500.0));
    }

    #[test]
    fn rejects_unpriceable_input() {
        let table = RateTable::default();
        assert_eq!(table.price(10_000.0, 0), Err(PricingRejection::InvalidTerm(0)));
        assert_eq!(table.price(10_000.0, -3), Err(PricingRejection::InvalidTerm(-3)));
        assert_eq!(table.price(0.0, 12), Err(PricingRejection::InvalidAmount(0.0)));
        assert!(matches!(
            table.price(f64::INFINITY, 12),
            Err(PricingRejection::InvalidAmount(_))
        ));
        assert!(matches!(
            table.price(f64::NAN, 12),
            Err(PricingRejection::InvalidAmount(_))
        ));
    }
}
