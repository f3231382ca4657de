// Default RESTCONF request headers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Media type for YANG-modeled JSON (RFC 8040).
pub const YANG_DATA_JSON: &str = "application/yang-data+json";

/// Library identifier sent when no user agent is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("wnc-api/", env!("CARGO_PKG_VERSION"));

/// Encode a username/password pair as the pre-encoded Basic token.
pub fn basic_token(username: &str, password: &SecretString) -> SecretString {
    let raw = format!("{username}:{}", password.expose_secret());
    SecretString::from(STANDARD.encode(raw))
}

/// Build the header set sent with every request.
///
/// The token is used as-is: `Authorization: Basic {token}`. Whether it is
/// a valid credential is for the controller to decide; an empty token
/// still yields a well-formed header.
pub fn default_headers(token: &SecretString, user_agent: &str) -> Result<HeaderMap, Error> {
    let mut auth = HeaderValue::from_str(&format!("Basic {}", token.expose_secret())).map_err(
        |e| Error::InvalidConfiguration {
            field: "token",
            reason: format!("not a valid header value: {e}"),
        },
    )?;
    auth.set_sensitive(true);

    let agent = HeaderValue::from_str(user_agent).map_err(|e| Error::InvalidConfiguration {
        field: "user_agent",
        reason: format!("not a valid header value: {e}"),
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static(YANG_DATA_JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(YANG_DATA_JSON));
    headers.insert(USER_AGENT, agent);
    Ok(headers)
}
