//! Async RESTCONF client runtime for the Cisco IOS-XE Wireless controller.
//!
//! - **[`Client`]**: owns the configured HTTP transport and the controller
//!   base URL. [`fetch`](Client::fetch) GETs any `restconf/data` resource
//!   into a caller-chosen type; [`submit`](Client::submit),
//!   [`delete`](Client::delete) and [`invoke_rpc`](Client::invoke_rpc) cover
//!   writes.
//! - **[`RequestContext`]**: per-call deadline and cancellation.
//! - **[`Error`]**: a closed taxonomy (`AuthenticationFailed`,
//!   `AccessForbidden`, `ResourceNotFound`, `RequestTimeout`, `Cancelled`,
//!   `RemoteApi`, `Other`) to branch on without string matching.
//! - **[`Retrying`]**: opt-in retry decorator; the core client never retries.
//! - **[`services`]**: thin per-domain façades (AP, clients, WLAN, ...).
//!
//! ```no_run
//! use std::time::Duration;
//! use wnc_api::{Client, RequestContext};
//!
//! # async fn example() -> Result<(), wnc_api::Error> {
//! let client = Client::builder("wnc.example.net", "YWRtaW46c2VjcmV0".to_owned())
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let ctx = RequestContext::background().with_timeout(Duration::from_secs(30));
//! let aps = client.ap().capwap_data(&ctx).await?;
//! for ap in &aps.capwap_data {
//!     println!("{} {:?}", ap.wtp_mac, ap.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod context;
pub mod error;
pub mod headers;
pub mod retry;
pub mod routes;
pub mod services;
pub mod transport;

pub use client::{Client, ClientBuilder, ClientConfig};
pub use context::RequestContext;
pub use error::{Cause, Error, classify_status, classify_transport};
pub use headers::{DEFAULT_USER_AGENT, YANG_DATA_JSON, basic_token, default_headers};
pub use retry::{RetryPolicy, Retrying};
pub use transport::TransportConfig;

pub use reqwest::Method;
pub use secrecy::SecretString;
