//! HTTP transport module
//!
//! Pooled form-posting client plus the retry policy wrapped around it.

mod client;
mod retry;

pub use client::{error_chain, HttpClient, HttpResponse, TransportError, DEFAULT_TIMEOUT_SECS};
pub use retry::{RetryPolicy, DEFAULT_BACKOFF, DEFAULT_DELAY_SECS, DEFAULT_RETRIES};
