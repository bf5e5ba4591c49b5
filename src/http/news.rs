use super::common::{Endpoint, construct_endpoint_url};
use super::error_helpers::{check_response, decode_json_object};
use super::loud_wire;
use crate::auth::Authenticator;
use crate::errors::NewsApiError;
use crate::payload::Payload;
use reqwest::Client as ReqwestClient;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// Converts a transport error, reporting timeouts with the configured duration.
///
/// The request URL is stripped since it may carry the API key as a query parameter.
fn transport_error(error: reqwest::Error, timeout: Duration) -> NewsApiError {
    if error.is_timeout() {
        NewsApiError::Timeout(timeout)
    } else {
        NewsApiError::Http(error.without_url())
    }
}

/// Issues one authenticated GET against a News API endpoint.
///
/// The payload is sent as query parameters. No retry is attempted.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails or times out
/// - The response status is not successful
/// - The response body is not a JSON object
pub async fn get_json(
    http_client: &ReqwestClient,
    authenticator: &dyn Authenticator,
    base_url: &str,
    endpoint: Endpoint,
    payload: &Payload,
    timeout: Duration,
) -> Result<Map<String, Value>, NewsApiError> {
    let url = construct_endpoint_url(base_url, endpoint);

    // LOUD_WIRE: Log outgoing request
    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, "GET", &url, &payload.to_json());
    debug!("GET {} Params {}", url, payload);

    let request = authenticator.authenticate(http_client.get(&url).query(payload.pairs()));
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(e, timeout))?;

    let status = response.status().as_u16();
    loud_wire::log_response_status(request_id, status);
    debug!("Response status {} from {}", status, endpoint.path());

    let response = check_response(response).await?;
    let response_text = response
        .text()
        .await
        .map_err(|e| transport_error(e, timeout))?;

    loud_wire::log_response_body(request_id, &response_text);

    decode_json_object(&response_text, endpoint.path())
}
