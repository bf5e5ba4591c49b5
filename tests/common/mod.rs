//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use newsapi::Client;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;
use wiremock::MockServer;

/// API key used against the mock server.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Creates a client from the NEWS_API_KEY environment variable.
/// Returns None if the API key is not set.
#[allow(dead_code)]
pub fn get_client() -> Option<Client> {
    Client::from_env().ok()
}

/// Base URL under the mock server, mirroring the real `/v2` prefix.
#[allow(dead_code)]
pub fn mock_base_url(server: &MockServer) -> String {
    format!("{}/v2", server.uri())
}

/// Creates a client pointed at the mock server.
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> Client {
    Client::builder(TEST_API_KEY)
        .base_url(mock_base_url(server))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Query parameters of every request the mock server received, in arrival order.
#[allow(dead_code)]
pub async fn received_queries(server: &MockServer) -> Vec<BTreeMap<String, String>> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .collect()
}

/// Builds an expected query map from literal pairs.
#[allow(dead_code)]
pub fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Default timeout for live integration tests (60 seconds).
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Wraps a future with a timeout, panicking if the timeout is exceeded.
///
/// # Panics
///
/// Panics with a descriptive message if the timeout is exceeded.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(duration, future)
        .await
        .unwrap_or_else(|_| panic!("Test timed out after {:?}", duration))
}
