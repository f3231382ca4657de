// Opt-in retry decorator around `Client`.
//
// The core client never retries. Wrapping it in `Retrying` re-issues
// requests that failed with a transient error, sleeping with capped
// exponential backoff between attempts. Backoff sleeps honor the request
// context, so a deadline or cancellation ends the loop.

use std::future::Future;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;

/// How many times, and how patiently, to retry transient failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts including the first. `1` disables retrying.
    pub max_attempts: u32,
    /// Delay before the second attempt. Doubles per attempt after that.
    pub initial_backoff: Duration,
    /// Upper bound on any single delay.
    pub max_backoff: Duration,
    /// Also retry POST/PUT/PATCH. Off by default since writes may not be
    /// idempotent on the controller.
    pub retry_writes: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(5),
            retry_writes: false,
        }
    }
}

impl RetryPolicy {
    /// Delay after the `attempt`-th failure (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// A [`Client`] that retries transient failures according to a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct Retrying {
    client: Client,
    policy: RetryPolicy,
}

impl Retrying {
    pub fn new(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// [`Client::fetch`] with retries.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<T, Error> {
        self.with_retries(ctx, true, || self.client.fetch(ctx, path))
            .await
    }

    /// [`Client::submit`], retried only when [`RetryPolicy::retry_writes`] is set.
    pub async fn submit<B: Serialize + Sync + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<(), Error> {
        self.with_retries(ctx, self.policy.retry_writes, || {
            self.client.submit(ctx, method.clone(), path, payload)
        })
        .await
    }

    async fn with_retries<T, F, Fut>(
        &self,
        ctx: &RequestContext,
        enabled: bool,
        op: F,
    ) -> Result<T, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let mut attempt: u32 = 1;
        loop {
            match op().await {
                Err(err)
                    if enabled && err.is_transient() && attempt < self.policy.max_attempts =>
                {
                    let delay = self.policy.backoff_for(attempt);
                    self.client.in_logger(|| {
                        warn!(attempt, ?delay, error = %err, "transient failure, retrying");
                    });
                    ctx.run(tokio::time::sleep(delay)).await?;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
