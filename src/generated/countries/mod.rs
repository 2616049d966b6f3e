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

mod countries;

pub(crate) use countries::COUNTRIES;

/// Raw compiled-in row of the country table. Rows are turned into
/// [`crate::Country`] values once, when the global catalog is first used.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CountryRecord {
    pub name: &'static str,
    pub iso2: &'static str,
    pub dial_code: &'static str,
    pub format: Option<&'static str>,
    pub priority: u32,
    pub area_codes: &'static [&'static str],
}

impl CountryRecord {
    pub(crate) const fn new(name: &'static str, iso2: &'static str, dial_code: &'static str) -> Self {
        Self { name, iso2, dial_code, format: None, priority: 0, area_codes: &[] }
    }

    pub(crate) const fn format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }

    pub(crate) const fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub(crate) const fn area_codes(mut self, area_codes: &'static [&'static str]) -> Self {
        self.area_codes = area_codes;
        self
    }
}
