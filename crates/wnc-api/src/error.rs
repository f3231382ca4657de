// Error taxonomy for the RESTCONF client runtime.
//
// Every failed call yields exactly one `Error` variant. HTTP responses are
// mapped by `classify_status`, transport failures by `classify_transport`.
// Neither looks at response body text beyond capturing it for `RemoteApi`.

use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error type for the `wnc-api` crate.
///
/// The set of variants is closed: callers branch on the discriminant
/// instead of matching message text.
#[derive(Debug, Error)]
pub enum Error {
    // ── Construction ────────────────────────────────────────────────
    /// Client configuration rejected before any I/O took place.
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    // ── HTTP status ─────────────────────────────────────────────────
    /// HTTP 401 -- the credential was rejected.
    #[error("authentication failed (HTTP 401)")]
    AuthenticationFailed,

    /// HTTP 403 -- the credential lacks the privilege for this resource.
    #[error("access forbidden (HTTP 403)")]
    AccessForbidden,

    /// HTTP 404 -- no such RESTCONF resource.
    #[error("resource not found (HTTP 404)")]
    ResourceNotFound,

    /// Any other non-2xx status, with the raw response body.
    #[error("remote API error (HTTP {status}): {}", preview(.body))]
    RemoteApi { status: u16, body: String },

    // ── Context ─────────────────────────────────────────────────────
    /// The request deadline elapsed (context deadline or per-request timeout).
    #[error("request timed out")]
    RequestTimeout,

    /// The caller cancelled the request context.
    #[error("request cancelled")]
    Cancelled,

    // ── Everything else ─────────────────────────────────────────────
    #[error(transparent)]
    Other(#[from] Cause),
}

/// Underlying reason for an [`Error::Other`].
#[derive(Debug, Error)]
pub enum Cause {
    /// TLS handshake or certificate validation failed.
    #[error("TLS error: {0}")]
    Tls(#[source] reqwest::Error),

    /// Connection refused, DNS failure, reset, etc.
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The 2xx body did not match the requested type.
    #[error("decode error: {message}")]
    Decode { message: String, body: String },

    /// The request payload could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A resource path produced an unparseable URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

const BODY_PREVIEW_CHARS: usize = 200;

fn preview(body: &str) -> String {
    if body.chars().count() > BODY_PREVIEW_CHARS {
        let head: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        body.to_owned()
    }
}

impl Error {
    /// The HTTP status this error was derived from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed => Some(401),
            Self::AccessForbidden => Some(403),
            Self::ResourceNotFound => Some(404),
            Self::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound)
    }

    /// Returns `true` if the controller rejected the credential or its privilege.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed | Self::AccessForbidden)
    }

    /// Returns `true` if the request ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestTimeout)
    }

    /// Returns `true` if the TLS layer failed.
    pub fn is_tls(&self) -> bool {
        matches!(self, Self::Other(Cause::Tls(_)))
    }

    /// Returns `true` if repeating the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestTimeout => true,
            Self::RemoteApi { status, .. } => matches!(status, 429 | 502 | 503 | 504),
            Self::Other(Cause::Transport(e)) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

// ── Classification ───────────────────────────────────────────────────

/// Map an HTTP status to its error kind. Returns `None` for 2xx.
///
/// Pure: the result depends only on `status`, and `body` is carried
/// verbatim into [`Error::RemoteApi`] without being inspected.
pub fn classify_status(status: StatusCode, body: &str) -> Option<Error> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::UNAUTHORIZED => Error::AuthenticationFailed,
        StatusCode::FORBIDDEN => Error::AccessForbidden,
        StatusCode::NOT_FOUND => Error::ResourceNotFound,
        _ => Error::RemoteApi {
            status: status.as_u16(),
            body: body.to_owned(),
        },
    })
}

/// Map a `reqwest` failure to its error kind.
///
/// A status carried by the error wins over everything else, since it means
/// the controller was reached.
pub fn classify_transport(err: reqwest::Error) -> Error {
    if let Some(classified) = err.status().and_then(|status| classify_status(status, "")) {
        return classified;
    }
    if err.is_timeout() {
        return Error::RequestTimeout;
    }
    if is_tls_failure(&err) {
        return Cause::Tls(err).into();
    }
    Cause::Transport(err).into()
}

/// Walk the source chain looking for a rustls error.
///
/// hyper wraps it in one or more `io::Error`s, and `io::Error::source`
/// skips the wrapped error itself, so those are unwrapped via `get_ref`.
fn is_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<rustls::Error>() {
            return true;
        }
        current = match e.downcast_ref::<std::io::Error>() {
            Some(io) => match io.get_ref() {
                Some(inner) => {
                    let inner: &(dyn StdError + 'static) = inner;
                    Some(inner)
                }
                None => e.source(),
            },
            None => e.source(),
        };
    }
    false
}
