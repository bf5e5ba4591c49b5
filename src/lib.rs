//! # newsapi
//!
//! A Rust client for the [News API](https://newsapi.org): `/top-headlines`,
//! `/everything` and `/sources`.
//!
//! Each call validates its filters, builds the query string, issues one GET with
//! the API key attached and returns the decoded JSON body as a
//! [`serde_json::Map`]. The response schema is deliberately not modelled.
//!
//! ## Quick Start
//!
//! ```no_run
//! use newsapi::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let headlines = client
//!         .top_headlines()
//!         .with_country("gb")
//!         .with_category("science")
//!         .send()
//!         .await?;
//!
//!     for article in headlines["articles"].as_array().into_iter().flatten() {
//!         println!("{}", article["title"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! Country, category and language codes are checked against known sets before
//! anything is sent, and a bad code comes back as
//! [`NewsApiError::InvalidArgument`]. The sets can be replaced with
//! [`ClientBuilder::with_countries`] and friends, or the check switched off with
//! [`ClientBuilder::without_validation`].
//!
//! ## Debugging
//!
//! - `tracing` events at `debug` level carry the endpoint and parameters of
//!   every request.
//! - Setting `LOUD_WIRE=1` dumps colorized requests and responses to stderr.

mod auth;
mod client;
pub mod constants;
mod errors;
mod http;
mod payload;
mod request_builder;
mod types;
mod validation;


pub use auth::{
    API_KEY_HEADER, API_KEY_QUERY_PARAM, ApiKeyHeader, ApiKeyQuery, Authenticator, SecretString,
};
pub use client::{API_KEY_ENV, BASE_URL_ENV, Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use errors::NewsApiError;
pub use http::common::{DEFAULT_BASE_URL, Endpoint};
pub use payload::{LIST_SEPARATOR, Payload};
pub use request_builder::{EverythingBuilder, SourcesBuilder, TopHeadlinesBuilder};
pub use types::{DateBound, SortBy};
pub use validation::{Parameter, Validator};
