use std::time::Duration;

use super::helper_constants::DEFAULT_SEARCH_DEBOUNCE;

/// Configuration of a [`crate::PhoneInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// Apply country templates while typing. When off, numbers are shown as
    /// `+` followed by the raw digits.
    pub auto_format: bool,
    /// Country shown for an empty field. `None` (or an unknown code) means
    /// the first catalog entry.
    pub default_country: Option<String>,
    /// Countries listed above the full list, in this order. Unknown codes
    /// are skipped.
    pub preferred_countries: Vec<String>,
    /// Restricts the catalog to these countries. Unknown codes are an error.
    pub only_countries: Option<Vec<String>>,
    /// Quiet period after the last type-ahead keystroke before searching.
    pub search_debounce: Duration,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            auto_format: true,
            default_country: None,
            preferred_countries: Vec::new(),
            only_countries: None,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl InputOptions {
    pub fn with_auto_format(mut self, auto_format: bool) -> Self {
        self.auto_format = auto_format;
        self
    }

    pub fn with_default_country(mut self, iso2: impl Into<String>) -> Self {
        self.default_country = Some(iso2.into());
        self
    }

    pub fn with_preferred_countries<I, S>(mut self, iso2s: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_countries = iso2s.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_only_countries<I, S>(mut self, iso2s: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_countries = Some(iso2s.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce = delay;
        self
    }
}
