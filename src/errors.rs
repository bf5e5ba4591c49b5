use crate::validation::Parameter;
use thiserror::Error;

/// Defines errors that can occur when interacting with the News API.
///
/// # Example: Handling Errors
///
/// ```ignore
/// match client.top_headlines().with_country("zz").send().await {
///     Err(NewsApiError::InvalidArgument { parameter, value }) => {
///         eprintln!("Bad {parameter}: {value}");
///     }
///     Err(NewsApiError::Api { status_code: 429, .. }) => {
///         tracing::warn!("Rate limited");
///     }
///     Err(NewsApiError::Api { status_code, code, message }) => {
///         tracing::error!("API error {} ({:?}): {}", status_code, code, message);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NewsApiError {
    /// A country, category or language code is not in the client's enumeration set.
    ///
    /// Raised before any network traffic happens.
    #[error("Invalid argument: {value:?} is not a valid {parameter}")]
    InvalidArgument {
        /// Which parameter was rejected
        parameter: Parameter,
        /// The rejected value, as supplied by the caller
        value: String,
    },
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// Request exceeded the timeout configured on the client.
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),
    /// The body decoded as JSON, but not as the object every News API endpoint returns.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
    /// API error with structured context.
    ///
    /// News API reports failures as
    /// `{"status": "error", "code": "apiKeyInvalid", "message": "..."}`.
    /// `code` is taken from that body when present.
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 400, 401, 429, 500)
        status_code: u16,
        /// News API error code (e.g., `apiKeyInvalid`, `rateLimited`), if the body had one
        code: Option<String>,
        /// Error message from the API response body
        message: String,
    },
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
    /// No API key was found in the named environment variable.
    #[error("Missing API key: environment variable {0} is not set")]
    MissingApiKey(&'static str),
    /// The API key was empty and no custom authenticator was configured.
    #[error("API key is empty")]
    EmptyApiKey,
}

impl NewsApiError {
    /// Returns `true` if this error is likely transient and the request may succeed on retry.
    ///
    /// The client itself never retries. Callers that do can use this to decide.
    /// Transient errors are:
    /// - **HTTP errors**: network issues, connection resets, TLS errors
    /// - **Rate limits (429)** and **server errors (5xx)**
    /// - **Timeouts**
    ///
    /// # Example
    ///
    /// ```rust
    /// use newsapi::NewsApiError;
    /// use std::time::Duration;
    ///
    /// let rate_limited = NewsApiError::Api {
    ///     status_code: 429,
    ///     code: Some("rateLimited".to_string()),
    ///     message: "You have made too many requests recently.".to_string(),
    /// };
    /// assert!(rate_limited.is_retryable());
    ///
    /// let bad_key = NewsApiError::Api {
    ///     status_code: 401,
    ///     code: Some("apiKeyInvalid".to_string()),
    ///     message: "Your API key is invalid or incorrect.".to_string(),
    /// };
    /// assert!(!bad_key.is_retryable());
    ///
    /// assert!(NewsApiError::Timeout(Duration::from_secs(30)).is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            NewsApiError::Http(_) => true,
            NewsApiError::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            NewsApiError::Timeout(_) => true,
            NewsApiError::InvalidArgument { .. }
            | NewsApiError::Json(_)
            | NewsApiError::MalformedResponse(_)
            | NewsApiError::ClientBuild(_)
            | NewsApiError::MissingApiKey(_)
            | NewsApiError::EmptyApiKey => false,
        }
    }

    /// Returns the rejected parameter if this is an [`NewsApiError::InvalidArgument`].
    #[must_use]
    pub fn invalid_parameter(&self) -> Option<Parameter> {
        match self {
            NewsApiError::InvalidArgument { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = NewsApiError::InvalidArgument {
            parameter: Parameter::Country,
            value: "zz".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("Invalid argument"));
        assert!(display.contains("\"zz\""));
        assert!(display.contains("country"));
    }

    #[test]
    fn test_invalid_parameter_accessor() {
        let error = NewsApiError::InvalidArgument {
            parameter: Parameter::Category,
            value: "gossip".to_string(),
        };
        assert_eq!(error.invalid_parameter(), Some(Parameter::Category));
        assert_eq!(
            NewsApiError::ClientBuild("x".to_string()).invalid_parameter(),
            None
        );
    }

    #[test]
    fn test_api_error_display() {
        let error = NewsApiError::Api {
            status_code: 401,
            code: Some("apiKeyInvalid".to_string()),
            message: "Your API key is invalid or incorrect.".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("401"));
        assert!(display.contains("Your API key is invalid"));
    }

    #[test]
    fn test_api_error_debug_includes_code() {
        let error = NewsApiError::Api {
            status_code: 426,
            code: Some("parameterInvalid".to_string()),
            message: "Bad".to_string(),
        };
        let debug = format!("{:?}", error);
        assert!(debug.contains("Api"));
        assert!(debug.contains("parameterInvalid"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let error: NewsApiError = json_err.into();
        assert!(error.to_string().contains("JSON decoding error"));
    }

    #[test]
    fn test_timeout_display() {
        let error = NewsApiError::Timeout(std::time::Duration::from_secs(30));
        let display = format!("{}", error);
        assert!(display.contains("Request timed out"));
        assert!(display.contains("30s"));
    }

    #[test]
    fn test_missing_api_key_display() {
        let error = NewsApiError::MissingApiKey("NEWS_API_KEY");
        assert_eq!(
            error.to_string(),
            "Missing API key: environment variable NEWS_API_KEY is not set"
        );
    }

    #[test]
    fn test_empty_api_key_display() {
        let error = NewsApiError::EmptyApiKey;
        assert_eq!(error.to_string(), "API key is empty");
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_is_retryable_server_errors_5xx() {
        for status_code in [500, 502, 503, 504] {
            let error = NewsApiError::Api {
                status_code,
                code: None,
                message: "Server error".to_string(),
            };
            assert!(
                error.is_retryable(),
                "{} errors should be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_client_errors_4xx_not_retryable() {
        for status_code in [400, 401, 404, 426] {
            let error = NewsApiError::Api {
                status_code,
                code: None,
                message: "Client error".to_string(),
            };
            assert!(
                !error.is_retryable(),
                "{} errors should NOT be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_invalid_argument_not_retryable() {
        let error = NewsApiError::InvalidArgument {
            parameter: Parameter::Language,
            value: "xx".to_string(),
        };
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_is_retryable_malformed_response_not_retryable() {
        let error = NewsApiError::MalformedResponse("expected a JSON object".to_string());
        assert!(!error.is_retryable());
    }
}
