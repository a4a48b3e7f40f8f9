//! Call executor for `pricing.v1.PricingService/Quote`.
//!
//! A `PricingClient` owns one tonic `Channel` for its whole lifetime. The channel
//! multiplexes calls as HTTP/2 streams, so the client can be cloned or shared and
//! used from many tasks at once; every `quote` is one independent remote call.
//!
//! Per call the executor goes `Idle -> AwaitingResponse -> Succeeded | Failed`.
//! Any status other than `OK` becomes a `RemoteCallError` carrying the code and
//! message unchanged. Nothing is retried and nothing is cached.
use std::time::Duration;

use log::{debug, warn};
use pricing_common::net::endpoint_uri;
use pricing_common::proto::{PricingServiceClient, QuoteRequest};
use pricing_common::{ClientConfig, PricingError, RemoteCallError, TransportSecurity};
use tonic::Status;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

use crate::model::quote::{QuoteInput, QuoteResult};

/// Async client for the pricing service.
#[derive(Debug, Clone)]
pub struct PricingClient {
    stub: PricingServiceClient<Channel>,
    request_timeout: Option<Duration>,
}

impl PricingClient {
    /// Builds a client whose channel connects on first use.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect_lazy(config: &ClientConfig) -> Result<Self, PricingError> {
        let endpoint = build_endpoint(config)?;
        Ok(Self::from_channel(
            endpoint.connect_lazy(),
            config.request_timeout,
        ))
    }

    /// Builds a client and establishes the connection before returning.
    pub async fn connect(config: &ClientConfig) -> Result<Self, PricingError> {
        let channel = build_endpoint(config)?.connect().await?;
        Ok(Self::from_channel(channel, config.request_timeout))
    }

    /// Wraps an existing channel.
    pub fn from_channel(channel: Channel, request_timeout: Option<Duration>) -> Self {
        PricingClient {
            stub: PricingServiceClient::new(channel),
            request_timeout,
        }
    }

    /// Quotes `input`, bounded by the configured request timeout if any.
    pub async fn quote(&self, input: &QuoteInput) -> Result<QuoteResult, RemoteCallError> {
        self.execute(input.to_request(), self.request_timeout).await
    }

    /// Quotes `input`, failing with `DeadlineExceeded` once `timeout` has elapsed.
    pub async fn quote_with_timeout(
        &self,
        input: &QuoteInput,
        timeout: Duration,
    ) -> Result<QuoteResult, RemoteCallError> {
        self.execute(input.to_request(), Some(timeout)).await
    }

    /// Sends a prepared request and maps the outcome.
    pub async fn execute(
        &self,
        request: QuoteRequest,
        timeout: Option<Duration>,
    ) -> Result<QuoteResult, RemoteCallError> {
        // Generated stubs take `&mut self`; a clone shares the same channel.
        let mut stub = self.stub.clone();
        debug!(
            "Quote awaiting response: amount={} term_months={} risk_score={:?}",
            request.amount, request.term_months, request.risk_score
        );

        let outcome = match timeout {
            Some(limit) => match tokio::time::timeout(limit, stub.quote(request)).await {
                Ok(outcome) => outcome,
                // Dropping the call future resets the HTTP/2 stream.
                Err(_) => Err(Status::deadline_exceeded(format!(
                    "no response within {}ms",
                    limit.as_millis()
                ))),
            },
            None => stub.quote(request).await,
        };

        match outcome {
            Ok(response) => {
                let result = QuoteResult::from(response.into_inner());
                debug!("Quote succeeded: {:?}", result);
                Ok(result)
            }
            Err(status) => {
                debug!(
                    "Quote failed: code={:?} message={}",
                    status.code(),
                    status.message()
                );
                Err(RemoteCallError::from(status))
            }
        }
    }
}

/// Translates a `ClientConfig` into a tonic `Endpoint`.
fn build_endpoint(config: &ClientConfig) -> Result<Endpoint, PricingError> {
    let uri = endpoint_uri(&config.target, config.security.is_tls());
    let mut endpoint = Endpoint::from_shared(uri.clone())
        .map_err(|e| PricingError::InvalidEndpoint(format!("{}: {}", uri, e)))?;

    if let Some(timeout) = config.connect_timeout {
        endpoint = endpoint.connect_timeout(timeout);
    }

    match &config.security {
        TransportSecurity::Insecure => {
            warn!("Pricing channel to {} is plaintext and unauthenticated", uri);
        }
        TransportSecurity::Tls { domain, ca_pem } => {
            let mut tls = ClientTlsConfig::new();
            if let Some(domain) = domain {
                tls = tls.domain_name(domain.clone());
            }
            tls = match ca_pem {
                Some(pem) => {
                    check_ca_pem(pem).map_err(|e| {
                        PricingError::InvalidEndpoint(format!("{}: CA bundle: {}", uri, e))
                    })?;
                    tls.ca_certificate(Certificate::from_pem(pem))
                }
                None => tls.with_native_roots(),
            };
            endpoint = endpoint.tls_config(tls)?;
        }
    }

    if config.request_timeout.is_none() {
        warn!(
            "No request timeout configured for {}; a stalled pricing service blocks callers indefinitely",
            uri
        );
    }
    Ok(endpoint)
}

/// Rejects a CA bundle holding no parseable certificate.
///
/// tonic only parses the bundle when the first connection is attempted.
fn check_ca_pem(pem: &[u8]) -> Result<(), String> {
    let certs = rustls_pemfile::certs(&mut &pem[..])
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    if certs.is_empty() {
        return Err("no PEM certificate found".to_string());
    }
    Ok(())
}
