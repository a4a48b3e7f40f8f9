//! Stub pricing services served in-process on ephemeral ports.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pricing_common::proto::{PricingService, PricingServiceServer, QuoteRequest, QuoteResponse};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// Binds `127.0.0.1:0`, serves `service` in the background and returns the address.
pub async fn spawn_server<S: PricingService>(service: S) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(PricingServiceServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

/// Always answers with the same triple.
pub struct FixedService(pub QuoteResponse);

#[tonic::async_trait]
impl PricingService for FixedService {
    async fn quote(&self, _: Request<QuoteRequest>) -> Result<Response<QuoteResponse>, Status> {
        Ok(Response::new(self.0))
    }
}

/// Always fails with the given status.
pub struct FailingService {
    pub code: tonic::Code,
    pub message: &'static str,
}

#[tonic::async_trait]
impl PricingService for FailingService {
    async fn quote(&self, _: Request<QuoteRequest>) -> Result<Response<QuoteResponse>, Status> {
        Err(Status::new(self.code, self.message))
    }
}

/// Records every request it receives and counts calls.
#[derive(Clone, Default)]
pub struct RecordingService {
    pub seen: Arc<Mutex<Vec<QuoteRequest>>>,
    pub calls: Arc<AtomicUsize>,
}

#[tonic::async_trait]
impl PricingService for RecordingService {
    async fn quote(&self, req: Request<QuoteRequest>) -> Result<Response<QuoteResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(*req.get_ref());
        Ok(Response::new(QuoteResponse {
            interest_rate: 0.049,
            apr: 0.054,
            monthly_payment: 457.5,
        }))
    }
}

/// Answers with values derived from the request, after a small delay, so that
/// responses can be matched back to the request that produced them.
pub struct EchoService;

#[tonic::async_trait]
impl PricingService for EchoService {
    async fn quote(&self, req: Request<QuoteRequest>) -> Result<Response<QuoteResponse>, Status> {
        let req = req.into_inner();
        // Later requests finish first to shuffle completion order.
        let delay = 60u64.saturating_sub(req.term_months as u64);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(Response::new(echo(&req)))
    }
}

/// Expected `EchoService` answer for `req`.
pub fn echo(req: &QuoteRequest) -> QuoteResponse {
    QuoteResponse {
        interest_rate: req.amount,
        apr: req.term_months as f64,
        monthly_payment: req.risk_score.unwrap_or(-1.0),
    }
}

/// Never answers within any reasonable deadline.
pub struct StalledService;

#[tonic::async_trait]
impl PricingService for StalledService {
    async fn quote(&self, _: Request<QuoteRequest>) -> Result<Response<QuoteResponse>, Status> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Err(Status::internal("unreachable"))
    }
}
