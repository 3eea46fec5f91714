//! HTTP Client Factory
//!
//! Provides a factory function for building the reqwest client shared by
//! API-backed services. Timeouts are enforced at the client level; the
//! orchestration layer adds none of its own.

use std::time::Duration;

/// Build a `reqwest::Client` with the standard timeout and user agent.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent("Lexsight/0.1")
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
