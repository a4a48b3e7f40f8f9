//! Command-line arguments for the pricing client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::fs;
use std::time::Duration;

use clap::Parser;
use pricing_client::{ClientConfig, PricingError, QuoteInput, TransportSecurity};
use pricing_common::net::DEFAULT_TARGET;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Pricing service address as `host:port`.
    #[arg(long, env = "PRICING_TARGET", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Loan amount.
    #[arg(long, default_value_t = 10_000.0)]
    pub amount: f64,

    /// Loan term in months.
    #[arg(long, default_value_t = 24)]
    pub term_months: i32,

    /// Optional risk score. Omitting it is not the same as passing 0.
    #[arg(long)]
    pub risk_score: Option<f64>,

    /// Per-call deadline in milliseconds. Without it the call waits indefinitely.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Connection establishment deadline in milliseconds.
    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    /// Use TLS instead of a plaintext channel.
    #[arg(long)]
    pub tls: bool,

    /// Server name to verify when `--tls` is set.
    #[arg(long, requires = "tls")]
    pub tls_domain: Option<String>,

    /// PEM CA bundle to trust when `--tls` is set.
    #[arg(long, requires = "tls")]
    pub ca_cert: Option<String>,
}

impl Args {
    /// Client configuration described by the flags.
    pub fn client_config(&self) -> Result<ClientConfig, PricingError> {
        let mut config = ClientConfig::new(self.target.clone());
        if let Some(ms) = self.timeout_ms {
            config = config.with_request_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.connect_timeout_ms {
            config = config.with_connect_timeout(Duration::from_millis(ms));
        }
        if self.tls {
            let ca_pem = match &self.ca_cert {
                Some(path) => Some(fs::read(path)?),
                None => None,
            };
            config = config.with_security(TransportSecurity::Tls {
                domain: self.tls_domain.clone(),
                ca_pem,
            });
        }
        Ok(config)
    }

    /// Quote input described by the flags.
    pub fn quote_input(&self) -> QuoteInput {
        QuoteInput {
            amount: self.amount,
            term_months: self.term_months,
            risk_score: self.risk_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_quote() {
        let args = Args::try_parse_from(["pricing_client", "--target", "localhost:50051"]).unwrap();
        let input = args.quote_input();
        assert_eq!(input, QuoteInput::new(10_000.0, 24));

        let config = args.client_config().unwrap();
        assert_eq!(config.target, "localhost:50051");
        assert_eq!(config.security, TransportSecurity::Insecure);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn target_is_passed_through_verbatim() {
        let target = "dns:///pricing-api.internal:50051";
        let args = Args::try_parse_from(["pricing_client", "--target", target]).unwrap();
        assert_eq!(args.client_config().unwrap().target, target);
    }

    #[test]
    fn zero_risk_score_is_kept() {
        let args = Args::try_parse_from(["pricing_client", "--risk-score", "0"]).unwrap();
        assert_eq!(args.quote_input().risk_score, Some(0.0));
    }

    #[test]
    fn timeouts_and_tls_flags() {
        let args = Args::try_parse_from([
            "pricing_client",
            "--target",
            "pricing.internal:443",
            "--timeout-ms",
            "1500",
            "--tls",
            "--tls-domain",
            "pricing.internal",
        ])
        .unwrap();
        let config = args.client_config().unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(
            config.security,
            TransportSecurity::Tls {
                domain: Some("pricing.internal".to_string()),
                ca_pem: None,
            }
        );
    }

    #[test]
    fn tls_domain_requires_tls() {
        assert!(Args::try_parse_from(["pricing_client", "--tls-domain", "x"]).is_err());
    }

    #[test]
    fn missing_ca_file_is_an_io_error() {
        let args = Args::try_parse_from([
            "pricing_client",
            "--tls",
            "--ca-cert",
            "/nonexistent/pricing-ca.pem",
        ])
        .unwrap();
        assert!(matches!(args.client_config(), Err(PricingError::Io(_))));
    }
}
