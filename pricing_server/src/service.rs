//! tonic service for `pricing.v1.PricingService`.
//!
//! Requests are priced with a `RateTable`; input the table rejects is answered with
//! `InvalidArgument` carrying the rejection message.
use log::{debug, info, warn};
use pricing_common::proto::{PricingService, QuoteRequest, QuoteResponse};
use tonic::{Request, Response, Status};

use crate::model::rate::RateTable;

/// `pricing.v1.PricingService` backed by a `RateTable`.
///
/// Each call is priced independently; the service keeps no per-client state.
#[derive(Debug, Clone, Default)]
pub struct TieredPricingService {
    rates: RateTable,
}

impl TieredPricingService {
    /// Creates a service pricing with `rates`.
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }
}

#[tonic::async_trait]
impl PricingService for TieredPricingService {
    async fn quote(
        &self,
        request: Request<QuoteRequest>,
    ) -> Result<Response<QuoteResponse>, Status> {
        let peer = request.remote_addr();
        let req = request.into_inner();
        match req.risk_score {
            Some(score) => debug!("Quote from {:?} with risk score {}", peer, score),
            None => debug!("Quote from {:?} without risk score", peer),
        }

        let pricing = self.rates.price(req.amount, req.term_months).map_err(|e| {
            warn!("Rejected quote from {:?}: {}", peer, e);
            Status::invalid_argument(e.to_string())
        })?;

        info!(
            "Quoted amount={} term_months={} rate={} monthly={:.2}",
            req.amount, req.term_months, pricing.interest_rate, pricing.monthly_payment
        );
        Ok(Response::new(QuoteResponse {
            interest_rate: pricing.interest_rate,
            apr: pricing.apr,
            monthly_payment: pricing.monthly_payment,
        }))
    }
}
