//! Command-line arguments for the pricing server.
use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use pricing_common::net::PRICING_PORT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(
        long,
        env = "PRICING_LISTEN",
        default_value_t = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PRICING_PORT))
    )]
    pub listen: SocketAddr,
}
