//! Default enumeration sets for the filters News API accepts.
//!
//! These are the values the validator checks against unless the client is built
//! with overrides (see [`ClientBuilder::with_countries`](crate::ClientBuilder::with_countries)).
//! If News API adds a country or language before this crate catches up, extend
//! the defaults rather than turning validation off.

/// 2-letter ISO 3166-1 country codes accepted by `/top-headlines` and `/sources`.
pub const COUNTRIES: &[&str] = &[
    "ae", "ar", "at", "au", "be", "bg", "br", "ca", "ch", "cn", "co", "cu", "cz", "de", "eg",
    "fr", "gb", "gr", "hk", "hu", "id", "ie", "il", "in", "it", "jp", "kr", "lt", "lv", "ma",
    "mx", "my", "ng", "nl", "no", "nz", "ph", "pl", "pt", "ro", "rs", "ru", "sa", "se", "sg",
    "si", "sk", "th", "tr", "tw", "ua", "us",
];

/// Headline categories.
pub const CATEGORIES: &[&str] = &[
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

/// 2-letter ISO 639-1 language codes.
pub const LANGUAGES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "he", "it", "nl", "no", "pt", "ru", "se", "ud", "zh",
];
