// Transport configuration for building the controller's reqwest::Client.
//
// IOS-XE RESTCONF endpoints speak HTTP/1.1 only, so HTTP/2 is never
// negotiated. Building a client does no network I/O.

use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::error::Error;

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
/// Bound on TCP connect plus TLS handshake.
pub const TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
/// Bound on waiting for the controller to start answering.
pub const RESPONSE_HEADER_TIMEOUT: Duration = Duration::from_secs(10);
/// How long a pooled connection may sit idle before it is closed.
pub const IDLE_CONNECTION_TIMEOUT: Duration = Duration::from_secs(90);
/// Idle pooled connections kept per controller host.
pub const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;
/// TCP keep-alive probe interval.
pub const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

/// Shared transport configuration for building HTTP clients.
///
/// Idle connections are capped per host only; reqwest has no setting for a
/// total idle cap across hosts.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Accept any certificate. Lab controllers with self-signed certs only.
    pub skip_tls_verify: bool,
    pub timeout: Duration,
    pub tls_handshake_timeout: Duration,
    pub response_header_timeout: Duration,
    pub idle_connection_timeout: Duration,
    pub max_idle_per_host: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            skip_tls_verify: false,
            timeout: DEFAULT_TIMEOUT,
            tls_handshake_timeout: TLS_HANDSHAKE_TIMEOUT,
            response_header_timeout: RESPONSE_HEADER_TIMEOUT,
            idle_connection_timeout: IDLE_CONNECTION_TIMEOUT,
            max_idle_per_host: MAX_IDLE_CONNECTIONS_PER_HOST,
        }
    }
}

impl TransportConfig {
    /// Transport defaults with the given TLS verification toggle.
    pub fn new(skip_tls_verify: bool) -> Self {
        Self {
            skip_tls_verify,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` carrying `headers` on every request.
    pub fn build_client(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .connect_timeout(self.tls_handshake_timeout)
            .read_timeout(self.response_header_timeout)
            .pool_idle_timeout(self.idle_connection_timeout)
            .pool_max_idle_per_host(self.max_idle_per_host)
            .tcp_keepalive(TCP_KEEPALIVE)
            .http1_only()
            .gzip(true)
            .brotli(true)
            .danger_accept_invalid_certs(self.skip_tls_verify)
            .build()
            .map_err(|e| Error::InvalidConfiguration {
                field: "transport",
                reason: format!("failed to build HTTP client: {e}"),
            })
    }
}
