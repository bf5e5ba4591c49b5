//! Fluent builders for the three News API endpoints.
//!
//! Each builder collects optional parameters, then [`payload`](TopHeadlinesBuilder::payload)
//! validates them and produces the query [`Payload`]. `send()` does the same and
//! issues the request. Building a payload never touches the client's state, so
//! any number of builders can share one client.

use crate::client::Client;
use crate::errors::NewsApiError;
use crate::http::common::Endpoint;
use crate::payload::Payload;
use crate::types::{DateBound, SortBy};
use crate::validation::Parameter;
use serde_json::{Map, Value};

fn collect_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// Builder for `/top-headlines`: live top and breaking headlines for a country,
/// a category in a country, or one or more sources.
///
/// # Example
///
/// ```no_run
/// # use newsapi::Client;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("api_key")?;
///
/// let headlines = client
///     .top_headlines()
///     .with_country("us")
///     .with_category("technology")
///     .with_page_size(20)
///     .send()
///     .await?;
///
/// println!("{} results", headlines["totalResults"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `send()` is called"]
pub struct TopHeadlinesBuilder<'a> {
    client: &'a Client,
    keywords: Vec<String>,
    sources: Vec<String>,
    language: Option<String>,
    country: Option<String>,
    category: Option<String>,
    page_size: Option<u32>,
    page: Option<u32>,
}

impl<'a> TopHeadlinesBuilder<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            client,
            keywords: Vec::new(),
            sources: Vec::new(),
            language: None,
            country: None,
            category: None,
            page_size: None,
            page: None,
        }
    }

    /// Keywords or phrases to search for, sent comma-joined as `q`.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = collect_strings(keywords);
        self
    }

    /// Appends a single keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Source identifiers (e.g. `bbc-news`), sent comma-joined.
    ///
    /// Use [`Client::sources`] to list valid identifiers.
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = collect_strings(sources);
        self
    }

    /// Appends a single source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// 2-letter ISO 639-1 language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// 2-letter ISO 3166-1 country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Headline category (e.g. `business`, `technology`).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Results per page. The API defaults to 20 and caps at 100.
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// 1-based page number.
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Validates the parameters and builds the query payload.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::InvalidArgument`] if validation is enabled and the
    /// country, language or category is not a permitted code.
    pub fn payload(&self) -> Result<Payload, NewsApiError> {
        self.client
            .validate(Parameter::Country, self.country.as_deref())?;
        self.client
            .validate(Parameter::Language, self.language.as_deref())?;
        self.client
            .validate(Parameter::Category, self.category.as_deref())?;

        let mut payload = Payload::new();
        payload.insert_joined("q", &self.keywords);
        payload.insert_joined("sources", &self.sources);
        payload.insert_opt("language", self.language.as_deref());
        payload.insert_opt("country", self.country.as_deref());
        payload.insert_opt("category", self.category.as_deref());
        payload.insert_opt("pageSize", self.page_size);
        payload.insert_opt("page", self.page);
        Ok(payload)
    }

    /// Sends the request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (before any network traffic), the
    /// request fails, or the response is not a JSON object.
    pub async fn send(self) -> Result<Map<String, Value>, NewsApiError> {
        let payload = self.payload()?;
        self.client.get(Endpoint::TopHeadlines, &payload).await
    }
}

/// Builder for `/everything`: search every article News API has indexed.
///
/// Only languages are validated here. This endpoint takes no country or
/// category filter, so those sets are never consulted.
///
/// # Example
///
/// ```no_run
/// # use newsapi::{Client, SortBy};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("api_key")?;
///
/// let articles = client
///     .everything()
///     .with_keywords(["bitcoin"])
///     .with_domains(["bbc.co.uk", "techcrunch.com"])
///     .with_from("2024-01-01")
///     .with_sort_by(SortBy::PublishedAt)
///     .with_page(2)
///     .with_page_size(50)
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `send()` is called"]
pub struct EverythingBuilder<'a> {
    client: &'a Client,
    keywords: Vec<String>,
    sources: Vec<String>,
    domains: Vec<String>,
    from: Option<DateBound>,
    to: Option<DateBound>,
    languages: Vec<String>,
    sort_by: Option<SortBy>,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl<'a> EverythingBuilder<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            client,
            keywords: Vec::new(),
            sources: Vec::new(),
            domains: Vec::new(),
            from: None,
            to: None,
            languages: Vec::new(),
            sort_by: None,
            page: None,
            page_size: None,
        }
    }

    /// Keywords or phrases to search for, sent comma-joined as `q`.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = collect_strings(keywords);
        self
    }

    /// Appends a single keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Source identifiers, sent comma-joined.
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = collect_strings(sources);
        self
    }

    /// Domains to restrict the search to (e.g. `bbc.co.uk`), sent comma-joined.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = collect_strings(domains);
        self
    }

    /// Oldest article date, sent as `from`.
    pub fn with_from(mut self, from: impl Into<DateBound>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Newest article date, sent as `to`.
    pub fn with_to(mut self, to: impl Into<DateBound>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Language codes, sent comma-joined as `language`. Each entry is validated.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = collect_strings(languages);
        self
    }

    /// Appends a single language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<SortBy>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// 1-based page number.
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Results per page. The API defaults to 100.
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Validates the languages and builds the query payload.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::InvalidArgument`] if validation is enabled and any
    /// language is not a permitted code.
    pub fn payload(&self) -> Result<Payload, NewsApiError> {
        self.client.validate_all(
            Parameter::Language,
            self.languages.iter().map(String::as_str),
        )?;

        let mut payload = Payload::new();
        payload.insert_joined("q", &self.keywords);
        payload.insert_joined("sources", &self.sources);
        payload.insert_joined("domains", &self.domains);
        payload.insert_opt("from", self.from.as_ref());
        payload.insert_opt("to", self.to.as_ref());
        payload.insert_joined("language", &self.languages);
        payload.insert_opt("sortBy", self.sort_by.as_ref());
        payload.insert_opt("page", self.page);
        payload.insert_opt("pageSize", self.page_size);
        Ok(payload)
    }

    /// Sends the request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (before any network traffic), the
    /// request fails, or the response is not a JSON object.
    pub async fn send(self) -> Result<Map<String, Value>, NewsApiError> {
        let payload = self.payload()?;
        self.client.get(Endpoint::Everything, &payload).await
    }
}

/// Builder for `/sources`: the publishers available to the other endpoints.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until `send()` is called"]
pub struct SourcesBuilder<'a> {
    client: &'a Client,
    category: Option<String>,
    language: Option<String>,
    country: Option<String>,
}

impl<'a> SourcesBuilder<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            client,
            category: None,
            language: None,
            country: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Validates the parameters and builds the query payload.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::InvalidArgument`] if validation is enabled and the
    /// country, language or category is not a permitted code.
    pub fn payload(&self) -> Result<Payload, NewsApiError> {
        self.client
            .validate(Parameter::Country, self.country.as_deref())?;
        self.client
            .validate(Parameter::Language, self.language.as_deref())?;
        self.client
            .validate(Parameter::Category, self.category.as_deref())?;

        let mut payload = Payload::new();
        payload.insert_opt("category", self.category.as_deref());
        payload.insert_opt("language", self.language.as_deref());
        payload.insert_opt("country", self.country.as_deref());
        Ok(payload)
    }

    /// Sends the request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (before any network traffic), the
    /// request fails, or the response is not a JSON object.
    pub async fn send(self) -> Result<Map<String, Value>, NewsApiError> {
        let payload = self.payload()?;
        self.client.get(Endpoint::Sources, &payload).await
    }
}
