//! Error handling utilities for HTTP responses and error context formatting.

use crate::errors::NewsApiError;
use reqwest::Response;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Maximum characters to include from error body in context messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// The error envelope News API returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Checks if an HTTP response is successful, returning it if so or an error otherwise.
///
/// # Errors
///
/// Returns [`NewsApiError::Api`] with status code and message on non-success status.
pub async fn check_response(response: Response) -> Result<Response, NewsApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(read_error_with_context(response).await)
    }
}

/// Reads an error response body and creates a [`NewsApiError::Api`].
///
/// When the body is News API's error envelope, `code` and `message` come from it.
/// Otherwise the message is a truncated preview of the raw body. If the body
/// cannot be read at all, the message describes the read failure.
pub async fn read_error_with_context(response: Response) -> NewsApiError {
    let status_code = response.status().as_u16();

    let error_body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error body: {}", e.without_url()));

    api_error_from_body(status_code, &error_body)
}

fn api_error_from_body(status_code: u16, body: &str) -> NewsApiError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            code,
            message: Some(message),
        }) => NewsApiError::Api {
            status_code,
            code,
            message,
        },
        Ok(ApiErrorBody {
            code,
            message: None,
        }) => NewsApiError::Api {
            status_code,
            code,
            message: truncate_for_context(body, ERROR_BODY_PREVIEW_LENGTH),
        },
        Err(_) => NewsApiError::Api {
            status_code,
            code: None,
            message: truncate_for_context(body, ERROR_BODY_PREVIEW_LENGTH),
        },
    }
}

/// Decodes a response body into the JSON object every News API endpoint returns.
///
/// # Errors
///
/// - [`NewsApiError::Json`] if the body is not JSON (a preview is logged at `warn`)
/// - [`NewsApiError::MalformedResponse`] if it is JSON but not an object
pub fn decode_json_object(body: &str, context: &str) -> Result<Map<String, Value>, NewsApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(
            "Failed to decode {}: {}",
            context,
            format_json_parse_error(body, &e)
        );
        NewsApiError::Json(e)
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(NewsApiError::MalformedResponse(format!(
            "{context}: expected a JSON object, got {}",
            truncate_for_context(&other.to_string(), ERROR_BODY_PREVIEW_LENGTH)
        ))),
    }
}

/// Formats JSON parsing context by including a preview of the raw JSON.
///
/// # Returns
///
/// A formatted error message with JSON preview (first 200 chars)
pub fn format_json_parse_error(json_str: &str, error: &serde_json::Error) -> String {
    let preview = truncate_for_context(json_str, ERROR_BODY_PREVIEW_LENGTH);
    format!("JSON parse error: {} | Context: {}", error, preview)
}

/// Truncates a string to specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte UTF-8 characters.
pub fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // End position of the last character that fits entirely within max_len
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}
