// --- URL Construction ---

/// Default News API base URL.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// The News API endpoints this client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Live top and breaking headlines
    TopHeadlines,
    /// Search across every article News API has indexed
    Everything,
    /// The publishers available to the other two endpoints
    Sources,
}

impl Endpoint {
    /// Constructs the URL path for this endpoint
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::TopHeadlines => "/top-headlines",
            Self::Everything => "/everything",
            Self::Sources => "/sources",
        }
    }
}

/// Strips trailing slashes so that paths can be appended directly.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Constructs the full URL for an endpoint under an already-normalized base URL.
///
/// Query parameters and the credential are attached by the request itself, never
/// formatted into this string.
#[must_use]
pub fn construct_endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{base_url}{}", endpoint.path())
}
