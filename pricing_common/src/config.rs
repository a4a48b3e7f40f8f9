//! Client configuration injected at construction time.
//!
//! The target endpoint is the only value the pricing contract requires. Transport
//! security and the two timeouts are explicit so that neither a plaintext channel nor
//! an unbounded wait happens silently.
use std::time::Duration;

use crate::net::DEFAULT_TARGET;

/// How the channel to the pricing service is secured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransportSecurity {
    /// Plaintext HTTP/2 without authentication.
    #[default]
    Insecure,
    /// TLS via rustls.
    Tls {
        /// Server name to verify; defaults to the host of the target.
        domain: Option<String>,
        /// PEM-encoded CA bundle; native roots are used when absent.
        ca_pem: Option<Vec<u8>>,
    },
}

impl TransportSecurity {
    /// `true` for any TLS variant.
    pub fn is_tls(&self) -> bool {
        matches!(self, TransportSecurity::Tls { .. })
    }
}

/// Everything needed to build a pricing client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port` (or full URI) of the pricing service.
    pub target: String,
    /// Channel security.
    pub security: TransportSecurity,
    /// Bound on establishing the connection.
    pub connect_timeout: Option<Duration>,
    /// Default bound on a single quote call. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Plaintext configuration for `target` with no timeouts.
    pub fn new(target: impl Into<String>) -> Self {
        ClientConfig {
            target: target.into(),
            security: TransportSecurity::Insecure,
            connect_timeout: None,
            request_timeout: None,
        }
    }

    /// Sets the channel security.
    pub fn with_security(mut self, security: TransportSecurity) -> Self {
        self.security = security;
        self
    }

    /// Sets the connection establishment bound.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the default per-call bound.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_TARGET)
    }
}
