use crate::NewsApiError;
use crate::auth::{ApiKeyHeader, Authenticator, SecretString};
use crate::http::common::{DEFAULT_BASE_URL, Endpoint, normalize_base_url};
use crate::payload::Payload;
use crate::request_builder::{EverythingBuilder, SourcesBuilder, TopHeadlinesBuilder};
use crate::validation::{Parameter, Validator};
use reqwest::Client as ReqwestClient;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable read by [`Client::from_env`] for the API key.
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

/// Environment variable read by [`Client::from_env`] for an optional base URL override.
pub const BASE_URL_ENV: &str = "NEWS_API_URL";

/// The main client for the News API.
///
/// Immutable once built. Cloning is cheap and clones share the underlying
/// connection pool, so one client can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    authenticator: Arc<dyn Authenticator>,
    validator: Option<Validator>,
    #[allow(clippy::struct_field_names)]
    http_client: ReqwestClient,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use newsapi::Client;
/// use std::time::Duration;
///
/// let client = Client::builder("api_key")
///     .base_url("https://newsapi.org/v2/")
///     .timeout(Duration::from_secs(10))
///     .with_languages(["en", "de"])
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url(), "https://newsapi.org/v2");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    authenticator: Option<Arc<dyn Authenticator>>,
    validator: Option<Validator>,
}

impl ClientBuilder {
    /// Overrides the API base URL. Trailing slashes are trimmed.
    ///
    /// Defaults to `https://newsapi.org/v2`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the total request timeout, applied to every request.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Replaces how the credential is attached to requests.
    ///
    /// By default the API key is sent in the `X-Api-Key` header. Note that a custom
    /// authenticator is used instead of the API key passed to [`Client::builder`].
    #[must_use]
    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Replaces the permitted country codes. Re-enables validation if it was disabled.
    #[must_use]
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validator = Some(self.validator.unwrap_or_default().with_countries(countries));
        self
    }

    /// Replaces the permitted categories. Re-enables validation if it was disabled.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validator = Some(
            self.validator
                .unwrap_or_default()
                .with_categories(categories),
        );
        self
    }

    /// Replaces the permitted language codes. Re-enables validation if it was disabled.
    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validator = Some(self.validator.unwrap_or_default().with_languages(languages));
        self
    }

    /// Uses a fully custom validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Sends country, category and language values without checking them.
    ///
    /// The API will still reject values it does not know.
    #[must_use]
    pub fn without_validation(mut self) -> Self {
        self.validator = None;
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::EmptyApiKey`] if the API key is empty and no custom
    /// authenticator was supplied.
    /// Returns [`NewsApiError::ClientBuild`] if the HTTP client cannot be constructed
    /// (e.g. TLS backend initialization failure).
    pub fn build(self) -> Result<Client, NewsApiError> {
        let authenticator: Arc<dyn Authenticator> = match self.authenticator {
            Some(authenticator) => authenticator,
            None if self.api_key.is_empty() => return Err(NewsApiError::EmptyApiKey),
            None => Arc::new(ApiKeyHeader::new(self.api_key)),
        };

        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| NewsApiError::ClientBuild(e.to_string()))?;

        Ok(Client {
            base_url: normalize_base_url(&self.base_url),
            timeout: self.timeout,
            authenticator,
            validator: self.validator,
            http_client,
        })
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    ///
    /// Validation starts enabled with the default country, category and
    /// language sets.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your News API key (get one at <https://newsapi.org>).
    #[must_use]
    pub fn builder(api_key: impl Into<SecretString>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            authenticator: None,
            validator: Some(Validator::default()),
        }
    }

    /// Creates a client with the default base URL, timeout and validation.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::EmptyApiKey`] if `api_key` is empty, or
    /// [`NewsApiError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<SecretString>) -> Result<Self, NewsApiError> {
        Self::builder(api_key).build()
    }

    /// Creates a client from `NEWS_API_KEY`, honouring `NEWS_API_URL` if set.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::MissingApiKey`] if `NEWS_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self, NewsApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a client from variables resolved by `lookup` instead of the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NewsApiError> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(NewsApiError::MissingApiKey(API_KEY_ENV))?;

        let mut builder = Self::builder(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV)
            && !base_url.is_empty()
        {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// The base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to every request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The validator in use, or `None` if validation is disabled.
    #[must_use]
    pub const fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Validates a single optional code. Always succeeds when validation is disabled.
    pub(crate) fn validate(
        &self,
        parameter: Parameter,
        value: Option<&str>,
    ) -> Result<(), NewsApiError> {
        match &self.validator {
            Some(validator) => validator.validate(parameter, value),
            None => Ok(()),
        }
    }

    /// Validates every entry of a multi-valued field. Always succeeds when validation is disabled.
    pub(crate) fn validate_all<'v>(
        &self,
        parameter: Parameter,
        values: impl IntoIterator<Item = &'v str>,
    ) -> Result<(), NewsApiError> {
        match &self.validator {
            Some(validator) => validator.validate_all(parameter, values),
            None => Ok(()),
        }
    }

    pub(crate) async fn get(
        &self,
        endpoint: Endpoint,
        payload: &Payload,
    ) -> Result<Map<String, Value>, NewsApiError> {
        crate::http::news::get_json(
            &self.http_client,
            self.authenticator.as_ref(),
            &self.base_url,
            endpoint,
            payload,
            self.timeout,
        )
        .await
    }

    // --- Endpoint builders ---

    /// Starts a `/top-headlines` request.
    pub fn top_headlines(&self) -> TopHeadlinesBuilder<'_> {
        TopHeadlinesBuilder::new(self)
    }

    /// Starts an `/everything` request.
    pub fn everything(&self) -> EverythingBuilder<'_> {
        EverythingBuilder::new(self)
    }

    /// Starts a `/sources` request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use newsapi::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    /// let sources = client
    ///     .sources()
    ///     .with_category("technology")
    ///     .with_language("en")
    ///     .with_country("us")
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn sources(&self) -> SourcesBuilder<'_> {
        SourcesBuilder::new(self)
    }
}
