// RESTCONF client core
//
// Owns the configured reqwest::Client and the controller base URL, and
// exposes the generic read (`fetch`) and write (`submit`, `delete`,
// `invoke_rpc`) operations every service façade builds on. The client
// never retries, caches, or mutates shared state after construction.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument::WithSubscriber;
use tracing::{Dispatch, debug, trace, warn};
use url::Url;

use crate::context::RequestContext;
use crate::error::{Cause, Error, classify_status, classify_transport};
use crate::headers::{DEFAULT_USER_AGENT, default_headers};
use crate::transport::{DEFAULT_TIMEOUT, TransportConfig};

// ── Configuration ────────────────────────────────────────────────────

/// Everything needed to talk to one controller.
///
/// Immutable once handed to [`Client::from_config`]. The credential is a
/// [`SecretString`], so `Debug` output never contains it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `host[:port]`, or a full `http(s)://host[:port]` base.
    pub controller: String,
    /// Pre-encoded Basic credential (see [`crate::basic_token`]).
    pub token: SecretString,
    pub timeout: Duration,
    /// Disable certificate validation. Lab use only.
    pub insecure_skip_verify: bool,
    /// Where request events go. `None` keeps the client silent.
    pub logger: Option<Dispatch>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(controller: impl Into<String>, token: SecretString) -> Self {
        Self {
            controller: controller.into(),
            token,
            timeout: DEFAULT_TIMEOUT,
            insecure_skip_verify: false,
            logger: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Reject configurations that can never make a request.
    pub fn validate(&self) -> Result<(), Error> {
        use secrecy::ExposeSecret;

        if self.controller.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                field: "controller",
                reason: "controller address is empty".into(),
            });
        }
        if self.token.expose_secret().is_empty() {
            return Err(Error::InvalidConfiguration {
                field: "token",
                reason: "credential token is empty".into(),
            });
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfiguration {
                field: "timeout",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Step-by-step [`ClientConfig`] construction.
///
/// Setters may be called in any order; the last call for a field wins.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn insecure_skip_verify(mut self, skip: bool) -> Self {
        self.config.insecure_skip_verify = skip;
        self
    }

    pub fn logger(mut self, dispatch: impl Into<Dispatch>) -> Self {
        self.config.logger = Some(dispatch.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// The configuration as it stands, without validating it.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build(self) -> Result<Client, Error> {
        Client::from_config(self.config)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async RESTCONF client for one controller.
///
/// Cheap to clone and safe to share across tasks: clones use the same
/// connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    /// Always ends with `/restconf/`.
    base_url: Url,
    timeout: Duration,
    user_agent: String,
    logger: Dispatch,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Start building a client for `controller` with a pre-encoded token.
    pub fn builder(controller: impl Into<String>, token: impl Into<SecretString>) -> ClientBuilder {
        ClientBuilder {
            config: ClientConfig::new(controller, token.into()),
        }
    }

    /// Validate `config` and build the transport. Performs no network I/O.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let base_url = Self::normalize_base_url(&config.controller)?;
        let headers = default_headers(&config.token, &config.user_agent)?;
        let http = TransportConfig::new(config.insecure_skip_verify)
            .with_timeout(config.timeout)
            .build_client(headers)?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                timeout: config.timeout,
                user_agent: config.user_agent,
                logger: config.logger.unwrap_or_else(Dispatch::none),
            }),
        })
    }

    /// Turn a controller address into `{scheme}://{host[:port]}/restconf/`.
    ///
    /// A bare host is addressed over HTTPS; an explicit scheme is kept.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let raw = raw.trim().trim_end_matches('/');
        let full = if raw.starts_with("https://") || raw.starts_with("http://") {
            raw.to_owned()
        } else {
            format!("https://{raw}")
        };

        let mut url = Url::parse(&full).map_err(|e| Error::InvalidConfiguration {
            field: "controller",
            reason: format!("{e}"),
        })?;
        if url.host_str().is_none_or(str::is_empty) {
            return Err(Error::InvalidConfiguration {
                field: "controller",
                reason: "controller address has no host".into(),
            });
        }

        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/restconf/"));
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The RESTCONF root, e.g. `https://wnc.example.net/restconf/`.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Run `f` with this client's logger as the active dispatcher.
    pub(crate) fn in_logger<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.inner.logger, f)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/restconf/data/{path}`
    pub fn data_url(&self, path: &str) -> Result<Url, Error> {
        self.restconf_url("data", path)
    }

    /// `{base}/restconf/operations/{rpc}`
    pub fn operations_url(&self, rpc: &str) -> Result<Url, Error> {
        self.restconf_url("operations", rpc)
    }

    fn restconf_url(&self, root: &str, path: &str) -> Result<Url, Error> {
        let path = path.trim_start_matches('/');
        // `join` would resolve these and step out of `root`.
        let segments = path.split(['?', '#']).next().unwrap_or_default();
        if segments.split(['/', '\\']).any(is_dot_segment) {
            return Err(Error::InvalidConfiguration {
                field: "path",
                reason: format!("{path:?} contains a '.' or '..' segment"),
            });
        }
        Ok(self
            .inner
            .base_url
            .join(&format!("{root}/{path}"))
            .map_err(Cause::InvalidUrl)?)
    }

    // ── Public operations ────────────────────────────────────────────

    /// GET a RESTCONF data resource and decode it into `T`.
    ///
    /// `T` describes the whole response document, including the
    /// `module:container` wrapper key, so this one function serves every
    /// resource type.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.data_url(path)?;
        let body = self.execute(ctx, Method::GET, url, None).await?;
        decode(&body)
    }

    /// Write `payload` to a data resource with POST, PUT or PATCH.
    pub async fn submit<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<(), Error> {
        if !matches!(method, Method::POST | Method::PUT | Method::PATCH) {
            return Err(Error::InvalidConfiguration {
                field: "method",
                reason: format!("{method} is not a RESTCONF write method"),
            });
        }
        let url = self.data_url(path)?;
        let body = serde_json::to_vec(payload).map_err(Cause::Encode)?;
        self.execute(ctx, method, url, Some(body)).await?;
        Ok(())
    }

    /// DELETE a data resource.
    pub async fn delete(&self, ctx: &RequestContext, path: &str) -> Result<(), Error> {
        let url = self.data_url(path)?;
        self.execute(ctx, Method::DELETE, url, None).await?;
        Ok(())
    }

    /// Invoke a YANG RPC: `POST {base}/restconf/operations/{rpc}`.
    pub async fn invoke_rpc<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        rpc: &str,
        input: &B,
    ) -> Result<(), Error> {
        let url = self.operations_url(rpc)?;
        let body = serde_json::to_vec(input).map_err(Cause::Encode)?;
        self.execute(ctx, Method::POST, url, Some(body)).await?;
        Ok(())
    }

    // ── Request execution ────────────────────────────────────────────

    /// Run one HTTP exchange under `ctx` and return the 2xx body text.
    async fn execute(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<String, Error> {
        let inner = &self.inner;

        let exchange = async move {
            debug!(%method, %url, "sending request");

            let mut request = inner.http.request(method.clone(), url.clone());
            if let Some(body) = body {
                trace!(bytes = body.len(), "request body");
                request = request.body(body);
            }

            let resp = request.send().await.map_err(|e| {
                let err = classify_transport(e);
                warn!(%method, %url, error = %err, "request failed");
                err
            })?;

            let status = resp.status();
            debug!(%method, %url, status = status.as_u16(), "response received");

            // The status decides before any body read failure does.
            let text = resp.text().await;
            if let Some(err) = classify_status(status, text.as_deref().unwrap_or_default()) {
                warn!(%method, %url, error = %err, "request rejected");
                return Err(err);
            }

            let text = text.map_err(classify_transport)?;
            trace!(bytes = text.len(), "response body");
            Ok::<_, Error>(text)
        };

        ctx.run(exchange.with_subscriber(inner.logger.clone()))
            .await?
    }
}

/// `.` or `..`, including the `%2e` spellings the URL parser also honors.
fn is_dot_segment(segment: &str) -> bool {
    let normalized = segment.to_ascii_lowercase().replace("%2e", ".");
    normalized == "." || normalized == ".."
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Cause::Decode {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
        .into()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builder(controller: &str) -> ClientBuilder {
        Client::builder(controller, "dG9rZW4=".to_owned())
    }

    #[test]
    fn bare_host_uses_https() {
        let client = builder("wnc.example.net").build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://wnc.example.net/restconf/");
    }

    #[test]
    fn explicit_scheme_and_port_are_kept() {
        let client = builder("http://127.0.0.1:8080/").build().unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/restconf/");
    }

    #[test]
    fn paths_cannot_leave_their_root() {
        let client = builder("wnc.example.net").build().unwrap();
        for path in [
            "../operations/x:rpc",
            "a/./b",
            "mod:c/%2E%2e/operations/x:rpc",
            "mod:c\\..\\..\\operations",
            "..",
        ] {
            assert!(
                matches!(
                    client.data_url(path),
                    Err(Error::InvalidConfiguration { field: "path", .. })
                ),
                "{path} was accepted"
            );
        }
        assert!(client.operations_url("../data/mod:c").is_err());

        // Dots inside a segment or a list key are fine.
        let url = client.data_url("mod:c/entry=v1.2..3").unwrap();
        assert_eq!(url.as_str(), "https://wnc.example.net/restconf/data/mod:c/entry=v1.2..3");
    }

    #[test]
    fn data_and_operation_urls() {
        let client = builder("wnc.example.net:8443").build().unwrap();
        assert_eq!(
            client
                .data_url("Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data")
                .unwrap()
                .as_str(),
            "https://wnc.example.net:8443/restconf/data/Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data"
        );
        assert_eq!(
            client.operations_url("/mod:rpc").unwrap().as_str(),
            "https://wnc.example.net:8443/restconf/operations/mod:rpc"
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(matches!(
            builder("").build(),
            Err(Error::InvalidConfiguration {
                field: "controller",
                ..
            })
        ));
        assert!(matches!(
            Client::builder("wnc", String::new()).build(),
            Err(Error::InvalidConfiguration { field: "token", .. })
        ));
        assert!(matches!(
            builder("wnc").timeout(Duration::ZERO).build(),
            Err(Error::InvalidConfiguration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn last_setter_wins() {
        let b = builder("wnc")
            .timeout(Duration::ZERO)
            .user_agent("first")
            .timeout(Duration::from_secs(3))
            .user_agent("second");
        assert_eq!(b.config().timeout, Duration::from_secs(3));

        let client = b.build().unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(3));
        assert_eq!(client.user_agent(), "second");
    }

    #[test]
    fn debug_hides_token() {
        let config = ClientConfig::new("wnc", SecretString::from("c2VjcmV0".to_owned()));
        assert!(!format!("{config:?}").contains("c2VjcmV0"));
        let client = Client::from_config(config).unwrap();
        assert!(!format!("{client:?}").contains("c2VjcmV0"));
    }

    #[test]
    fn decode_failure_is_other() {
        let result: Result<serde_json::Map<String, serde_json::Value>, _> = decode("[1, 2]");
        assert!(matches!(result, Err(Error::Other(Cause::Decode { .. }))));
    }
}
