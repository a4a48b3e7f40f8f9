//! Pricing gRPC server.
//!
//! Binds the listen address (`--listen` or `PRICING_LISTEN`, default `0.0.0.0:50051`)
//! and serves `pricing.v1.PricingService/Quote` until Ctrl+C.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};
use pricing_common::PricingError;
use pricing_common::Result;
use pricing_server::TieredPricingService;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), PricingError> {
    init_logger();
    let args = Args::parse();

    let listener = TcpListener::bind(args.listen).await?;
    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Ctrl+C received. Shutting down server..."),
            Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
        }
    };

    pricing_server::serve(listener, TieredPricingService::default(), shutdown).await
}

fn init_logger() {
    logger_builder(Env::default()).init();
}

/// `Info` by default; filters from `env` (normally `RUST_LOG`) take precedence.
fn logger_builder(env: Env<'_>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(log::LevelFilter::Info).parse_env(env);
    builder
}
