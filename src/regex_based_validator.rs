// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;

use log::error;

use super::regex_util::RegexFullMatch;
use crate::{
    interfaces::NumberValidator,
    regexp_cache::{InvalidRegexError, RegexCache},
    Country,
};

/// Strict alternative to the permissive default: a number is valid when its
/// national part (what follows the dial code) fully matches the pattern
/// registered for one of the countries owning that dial code.
///
/// Countries without a pattern never validate.
#[derive(Debug, Default)]
pub struct RegexBasedValidator {
    cache: RegexCache,
    national_patterns: HashMap<String, String>,
}

impl RegexBasedValidator {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(32), national_patterns: HashMap::new() }
    }

    /// Registers the national number pattern of `iso2`, e.g. `[2-9]\d{9}`.
    pub fn with_pattern(mut self, iso2: &str, pattern: impl Into<String>) -> Self {
        self.national_patterns
            .insert(iso2.to_ascii_lowercase(), pattern.into());
        self
    }

    fn match_national_number(&self, national_number: &str, pattern: &str) -> Result<bool, InvalidRegexError> {
        let anchored = fast_cat::concat_str!("^(?:", pattern, ")$");
        let regexp = self.cache.get_regex(&anchored)?;
        Ok(regexp.full_match(national_number))
    }
}

impl NumberValidator for RegexBasedValidator {
    fn is_valid(&self, number: &str, countries: &[Country]) -> bool {
        countries
            .iter()
            .filter_map(|country| {
                let national_number = number.strip_prefix(country.dial_code())?;
                let pattern = self.national_patterns.get(country.iso2())?;
                Some((national_number, pattern))
            })
            .any(|(national_number, pattern)| {
                match self.match_national_number(national_number, pattern) {
                    Ok(matched) => matched,
                    Err(err) => {
                        error!("Invalid national number pattern {}: {}", pattern, err);
                        false
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBasedValidator;
    use crate::{interfaces::NumberValidator, Country};

    fn countries() -> Vec<Country> {
        vec![
            Country::new("us", "United States", "1"),
            Country::new("gb", "United Kingdom", "44"),
            Country::new("ru", "Russia", "7"),
        ]
    }

    #[test]
    fn validates_national_part() {
        let validator = RegexBasedValidator::new()
            .with_pattern("US", r"[2-9]\d{9}")
            .with_pattern("gb", r"7\d{9}|20\d{8}");

        assert!(validator.is_valid("17025550123", &countries()));
        assert!(!validator.is_valid("10025550123", &countries()));
        assert!(validator.is_valid("447911123456", &countries()));
        assert!(!validator.is_valid("4479111234567", &countries()));
        // no pattern registered for Russia
        assert!(!validator.is_valid("79161234567", &countries()));
    }

    #[test]
    fn broken_pattern_is_not_valid() {
        let validator = RegexBasedValidator::new().with_pattern("us", "(");
        assert!(!validator.is_valid("17025550123", &countries()));
    }
}
