//! Shared networking constants and helpers used by client and server.

/// Default port of the pricing gRPC service.
pub const PRICING_PORT: u16 = 50051;
/// Default `host:port` the client targets when nothing else is configured.
pub const DEFAULT_TARGET: &str = "pricing-api:50051";

/// Turns a `host:port` target into an endpoint URI.
///
/// Targets that already carry a scheme are returned unchanged; bare targets get
/// `https://` when `tls` is set and `http://` otherwise.
pub fn endpoint_uri(target: &str, tls: bool) -> String {
    let target = target.trim();
    if target.contains("://") {
        return target.to_string();
    }
    let scheme = if tls { "https" } else { "http" };
    format!("{}://{}", scheme, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_target_gets_scheme() {
        assert_eq!(endpoint_uri("pricing-api:50051", false), "http://pricing-api:50051");
        assert_eq!(endpoint_uri(" pricing-api:443 ", true), "https://pricing-api:443");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        assert_eq!(endpoint_uri("https://10.0.0.1:50051", false), "https://10.0.0.1:50051");
    }

    #[test]
    fn default_target_uses_default_port() {
        assert!(DEFAULT_TARGET.ends_with(&format!(":{}", PRICING_PORT)));
    }
}
