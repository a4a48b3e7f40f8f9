//! Error types shared between client and server.
//!
//! Two layers are kept apart:
//! - `RemoteCallError` is what a quote call fails with. It carries the gRPC status
//!   code and message exactly as the transport reported them.
//! - `PricingError` unifies everything a process can hit around the call (bad
//!   endpoint, I/O, transport setup), so binaries can propagate a single type.
use std::io;

use thiserror::Error;
use tonic::{Code, Status};

/// A quote call that did not end with status `OK`.
///
/// Covers rejections by the pricing service, transport failures surfaced as a status
/// (unreachable peer, reset connection) and expired deadlines. No local
/// reinterpretation is applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("gRPC error: {message} (code {code})")]
pub struct RemoteCallError {
    /// Numeric gRPC status code, never `0`.
    pub code: i32,
    /// Status message (`details`) as sent by the peer or the transport.
    pub message: String,
}

impl RemoteCallError {
    /// Creates an error from a status code and message.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        RemoteCallError {
            code: code as i32,
            message: message.into(),
        }
    }

    /// Typed view of `code`.
    pub fn status(&self) -> Code {
        Code::from_i32(self.code)
    }
}

impl From<Status> for RemoteCallError {
    fn from(status: Status) -> Self {
        RemoteCallError::new(status.code(), status.message())
    }
}

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum PricingError {
    /// The configured target could not be turned into a gRPC endpoint.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failure while setting up the transport (TLS config, eager connect, serving).
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// The remote call itself failed.
    #[error(transparent)]
    Remote(#[from] RemoteCallError),

    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_keeps_status_verbatim() {
        let err = RemoteCallError::from(Status::unavailable("unavailable"));
        assert_eq!(err.code, 14);
        assert_eq!(err.message, "unavailable");
        assert_eq!(err.status(), Code::Unavailable);
        assert_eq!(err.to_string(), "gRPC error: unavailable (code 14)");
    }

    #[test]
    fn remote_error_converts_into_pricing_error() {
        let err: PricingError = RemoteCallError::new(Code::InvalidArgument, "bad term").into();
        match err {
            PricingError::Remote(inner) => assert_eq!(inner.code, 3),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
