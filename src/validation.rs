//! Membership checks for country, category and language codes.

use crate::constants::{CATEGORIES, COUNTRIES, LANGUAGES};
use crate::errors::NewsApiError;
use std::collections::BTreeSet;
use std::fmt;

/// A filter parameter whose values are restricted to an enumeration set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Country,
    Category,
    Language,
}

impl Parameter {
    /// The query-string key this parameter is sent under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Category => "category",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks supplied codes against the permitted country, category and language sets.
///
/// Unset or empty values always pass. A value outside its set fails with
/// [`NewsApiError::InvalidArgument`].
///
/// # Example
///
/// ```
/// use newsapi::{Parameter, Validator};
///
/// let validator = Validator::default();
/// assert!(validator.validate(Parameter::Country, Some("us")).is_ok());
/// assert!(validator.validate(Parameter::Country, None).is_ok());
///
/// let err = validator.validate(Parameter::Country, Some("zz")).unwrap_err();
/// assert_eq!(err.invalid_parameter(), Some(Parameter::Country));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    countries: BTreeSet<String>,
    categories: BTreeSet<String>,
    languages: BTreeSet<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            countries: to_set(COUNTRIES.iter().copied()),
            categories: to_set(CATEGORIES.iter().copied()),
            languages: to_set(LANGUAGES.iter().copied()),
        }
    }
}

fn to_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl Validator {
    /// Replaces the permitted country codes.
    #[must_use]
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = to_set(countries);
        self
    }

    /// Replaces the permitted categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = to_set(categories);
        self
    }

    /// Replaces the permitted language codes.
    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = to_set(languages);
        self
    }

    fn set_for(&self, parameter: Parameter) -> &BTreeSet<String> {
        match parameter {
            Parameter::Country => &self.countries,
            Parameter::Category => &self.categories,
            Parameter::Language => &self.languages,
        }
    }

    /// Returns whether `value` is a member of the set for `parameter`.
    #[must_use]
    pub fn permits(&self, parameter: Parameter, value: &str) -> bool {
        self.set_for(parameter).contains(value)
    }

    /// Validates a single optional code.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::InvalidArgument`] naming `parameter` and the rejected
    /// value when a non-empty value is not in the permitted set.
    pub fn validate(&self, parameter: Parameter, value: Option<&str>) -> Result<(), NewsApiError> {
        match value {
            None | Some("") => Ok(()),
            Some(code) if self.permits(parameter, code) => Ok(()),
            Some(code) => Err(NewsApiError::InvalidArgument {
                parameter,
                value: code.to_string(),
            }),
        }
    }

    /// Validates every entry of a multi-valued field, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::InvalidArgument`] for the first entry not in the set.
    pub fn validate_all<'v>(
        &self,
        parameter: Parameter,
        values: impl IntoIterator<Item = &'v str>,
    ) -> Result<(), NewsApiError> {
        values
            .into_iter()
            .try_for_each(|value| self.validate(parameter, Some(value)))
    }

    /// Permitted country codes, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    /// Permitted categories, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Permitted language codes, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }
}
