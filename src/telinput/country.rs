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

use std::hash::{Hash, Hasher};

use crate::generated::countries::CountryRecord;

/// A country entry of the catalog.
///
/// Two countries are equal when their iso2 codes are equal; the remaining
/// fields are treated as data attached to that key.
#[derive(Debug, Clone)]
pub struct Country {
    iso2: String,
    name: String,
    dial_code: String,
    format: Option<String>,
    priority: u32,
    area_codes: Vec<String>,
}

impl Country {
    /// Creates a country without a format mask and with priority `0`.
    /// The iso2 code is stored lowercase.
    pub fn new(iso2: impl Into<String>, name: impl Into<String>, dial_code: impl Into<String>) -> Self {
        let mut iso2 = iso2.into();
        iso2.make_ascii_lowercase();
        Self {
            iso2,
            name: name.into(),
            dial_code: dial_code.into(),
            format: None,
            priority: 0,
            area_codes: Vec::new(),
        }
    }

    /// Sets the display template, e.g. `+. (...) ...-....`, where every `.`
    /// consumes one digit. An empty template means "no mask".
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        self.format = if format.is_empty() { None } else { Some(format) };
        self
    }

    /// Lower priority wins between countries whose dial codes have the same length.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Area codes that follow the dial code, used to tell apart countries
    /// sharing one dial code.
    pub fn with_area_codes<I, S>(mut self, area_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.area_codes = area_codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn area_codes(&self) -> &[String] {
        &self.area_codes
    }

    /// Identity check on the iso2 key.
    pub fn is_same(&self, other: &Country) -> bool {
        self.iso2 == other.iso2
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iso2.hash(state);
    }
}

impl Country {
    pub(crate) fn from_record(record: &CountryRecord) -> Self {
        let country = Country::new(record.iso2, record.name, record.dial_code)
            .with_priority(record.priority)
            .with_area_codes(record.area_codes.iter().copied());
        match record.format {
            Some(format) => country.with_format(format),
            None => country,
        }
    }
}
