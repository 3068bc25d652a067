//! Retry policy for connection failures
//!
//! Only connection-level failures are retried. The wait before retry `n`
//! (1-based) is `delay * backoff * n` seconds: linear in the attempt number,
//! scaled by the backoff factor.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

use super::TransportError;
use crate::error::{Error, Result};

pub const DEFAULT_RETRIES: i64 = 5;
pub const DEFAULT_DELAY_SECS: f64 = 1.0;
pub const DEFAULT_BACKOFF: f64 = 2.0;

/// Validated retry policy
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    retries: u32,
    delay_secs: f64,
    backoff: f64,
}

impl RetryPolicy {
    /// Create a policy, rejecting invalid parameters
    ///
    /// `backoff` must be greater than 1, `retries` at least 0 and `delay_secs`
    /// greater than 0.
    pub fn new(retries: i64, delay_secs: f64, backoff: f64) -> Result<Self> {
        if !(backoff > 1.0) {
            return Err(Error::InvalidRetryPolicy(format!(
                "backoff must be greater than 1, got {backoff}"
            )));
        }
        if retries < 0 {
            return Err(Error::InvalidRetryPolicy(format!(
                "retries must be 0 or greater, got {retries}"
            )));
        }
        if !(delay_secs > 0.0) {
            return Err(Error::InvalidRetryPolicy(format!(
                "delay must be greater than 0, got {delay_secs}"
            )));
        }

        let retries = u32::try_from(retries)
            .map_err(|_| Error::InvalidRetryPolicy(format!("retries too large: {retries}")))?;

        Ok(Self {
            retries,
            delay_secs,
            backoff,
        })
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn delay_secs(&self) -> f64 {
        self.delay_secs
    }

    pub fn backoff(&self) -> f64 {
        self.backoff
    }

    /// Wait before retry `attempt` (1-based)
    pub fn wait_before(&self, attempt: u32) -> Duration {
        let secs = self.delay_secs * self.backoff * f64::from(attempt);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Run `op`, retrying it on connection failures
    ///
    /// Any other error is returned immediately. When retries run out the last
    /// connection error is returned.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> std::result::Result<T, TransportError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, TransportError>>,
    {
        let mut last_err = match op().await {
            Err(err) if err.is_connect() => err,
            other => return other,
        };

        for attempt in 1..=self.retries {
            let wait = self.wait_before(attempt);
            warn!(
                "{}; retry {}/{} in {:.2}s",
                last_err,
                attempt,
                self.retries,
                wait.as_secs_f64()
            );
            tokio::time::sleep(wait).await;

            match op().await {
                Err(err) if err.is_connect() => last_err = err,
                other => return other,
            }
        }

        Err(last_err)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES as u32,
            delay_secs: DEFAULT_DELAY_SECS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}
