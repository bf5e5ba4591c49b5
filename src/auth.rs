//! Credential handling.
//!
//! Every outgoing request passes through an [`Authenticator`], which decorates it
//! with the API key. The default sends the key in the `X-Api-Key` header so it
//! stays out of URLs, proxy logs and error messages. [`ApiKeyQuery`] is there for
//! environments that strip custom headers.

use reqwest::RequestBuilder;
use std::fmt;

/// Header name for API key authentication.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Query parameter name for API key authentication.
pub const API_KEY_QUERY_PARAM: &str = "apiKey";

/// A string that is redacted in `Debug` and `Display` output.
///
/// ```
/// use newsapi::SecretString;
///
/// let key = SecretString::new("0123456789abcdef");
/// assert_eq!(format!("{key:?}"), "<REDACTED>");
/// assert_eq!(key.expose(), "0123456789abcdef");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the underlying secret. Only call this when attaching it to a request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Decorates an outgoing request with a credential.
///
/// Implement this to authenticate some other way (a proxy token, a signed header).
///
/// ```
/// use newsapi::Authenticator;
/// use reqwest::RequestBuilder;
///
/// #[derive(Debug)]
/// struct Bearer(String);
///
/// impl Authenticator for Bearer {
///     fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
///         request.bearer_auth(&self.0)
///     }
/// }
/// ```
pub trait Authenticator: fmt::Debug + Send + Sync {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Sends the API key in the `X-Api-Key` header.
#[derive(Debug, Clone)]
pub struct ApiKeyHeader {
    api_key: SecretString,
}

impl ApiKeyHeader {
    #[must_use]
    pub fn new(api_key: impl Into<SecretString>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl Authenticator for ApiKeyHeader {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(API_KEY_HEADER, self.api_key.expose())
    }
}

/// Sends the API key as the `apiKey` query parameter.
#[derive(Debug, Clone)]
pub struct ApiKeyQuery {
    api_key: SecretString,
}

impl ApiKeyQuery {
    #[must_use]
    pub fn new(api_key: impl Into<SecretString>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl Authenticator for ApiKeyQuery {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.query(&[(API_KEY_QUERY_PARAM, self.api_key.expose())])
    }
}
