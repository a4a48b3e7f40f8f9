//! Pricing gRPC server.
//!
//! Serves `pricing.v1.PricingService/Quote` from a tiered rate table:
//!
//! - `model::rate` — `RateTable`, the quote formula and rejection of unpriceable input.
//! - `service` — `TieredPricingService`, the tonic service wrapping the table.
//! - `serve` — runs the service on an already bound listener until `shutdown` resolves.
#![warn(missing_docs)]
use std::future::Future;

use log::info;
use pricing_common::Result;
use pricing_common::proto::PricingServiceServer;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

pub mod model;
pub mod service;

pub use service::TieredPricingService;

/// Serves `service` on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, service: TieredPricingService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    info!("pricing gRPC listening on {}", listener.local_addr()?);
    Server::builder()
        .add_service(PricingServiceServer::new(service))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;
    info!("pricing gRPC stopped");
    Ok(())
}
