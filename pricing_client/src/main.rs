//! Pricing Client — requests one loan quote from the pricing gRPC service and prints
//! the result as JSON on stdout.
//!
//! Usage example (CLI):
//! ```bash
//! pricing_client --target pricing-api:50051 --amount 10000 --term-months 24 --timeout-ms 2000
//! ```
//!
//! The target can also come from `PRICING_TARGET`. A non-OK status is logged with its
//! code and message and the process exits with an error.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};
use pricing_client::BlockingPricingClient;
use pricing_common::PricingError;
use pricing_common::Result;

fn main() -> Result<(), PricingError> {
    init_logger();
    let args = Args::parse();

    let config = args.client_config()?;
    let input = args.quote_input();
    info!("Requesting quote from {}: {:?}", config.target, input);

    let client = BlockingPricingClient::connect(&config)?;
    match client.quote(&input) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            error!("Quote failed with code {}: {}", e.code, e.message);
            Err(e.into())
        }
    }
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
