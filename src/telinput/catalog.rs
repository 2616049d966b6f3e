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

use std::collections::{HashMap, HashSet};

use log::{trace, warn};

use super::{country::Country, errors::CatalogError};

type Result<T> = std::result::Result<T, CatalogError>;

/// Maps `dial code + area code` prefixes to the countries that own them.
///
/// Lists are ordered by ascending priority (catalog order among equal
/// priorities); the first entry is the default pick for its prefix.
#[derive(Debug, Clone, Default)]
pub struct AreaCodeIndex {
    entries: HashMap<String, Vec<String>>,
}

impl AreaCodeIndex {
    fn build(countries: &[Country]) -> Self {
        let mut ranked = HashMap::<String, Vec<(u32, String)>>::new();
        for country in countries {
            for area_code in country.area_codes() {
                let prefix = fast_cat::concat_str!(country.dial_code(), area_code);
                ranked
                    .entry(prefix)
                    .or_default()
                    .push((country.priority(), country.iso2().to_owned()));
            }
        }

        let entries = ranked
            .into_iter()
            .map(|(prefix, mut owners)| {
                // stable sort keeps catalog order among equal priorities
                owners.sort_by_key(|(priority, _)| *priority);
                (prefix, owners.into_iter().map(|(_, iso2)| iso2).collect())
            })
            .collect();
        Self { entries }
    }

    /// Returns the ordered iso2 list registered for `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&[String]> {
        self.entries.get(prefix).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered, validated list of countries plus the lookup structures derived
/// from it.
///
/// A catalog is never empty, so [`Catalog::first`] always has an answer.
/// Both derived structures are rebuilt whenever the list changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
    iso2_index: HashMap<String, usize>,
    area_codes: AreaCodeIndex,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for country in &countries {
            validate_country(country)?;
        }
        let iso2_index = build_iso2_index(&countries)?;
        let area_codes = AreaCodeIndex::build(&countries);
        trace!(
            "Built catalog of {} countries with {} area code prefixes",
            countries.len(),
            area_codes.len()
        );
        Ok(Self { countries, iso2_index, area_codes })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn first(&self) -> &Country {
        // non-empty by construction
        &self.countries[0]
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive lookup by iso2.
    pub fn get(&self, iso2: &str) -> Option<&Country> {
        self.index_of(iso2).map(|index| &self.countries[index])
    }

    pub fn index_of(&self, iso2: &str) -> Option<usize> {
        self.iso2_index.get(&iso2.to_ascii_lowercase()).copied()
    }

    pub fn area_codes(&self) -> &AreaCodeIndex {
        &self.area_codes
    }

    /// Appends a country and rebuilds both lookup structures.
    pub fn push(&mut self, country: Country) -> Result<()> {
        validate_country(&country)?;
        if self.iso2_index.contains_key(country.iso2()) {
            return Err(CatalogError::DuplicateIso2(country.iso2().to_owned()));
        }
        self.countries.push(country);
        self.iso2_index = build_iso2_index(&self.countries)?;
        self.area_codes = AreaCodeIndex::build(&self.countries);
        Ok(())
    }

    /// A catalog holding only the listed countries, in this catalog's order.
    pub fn restricted_to<S: AsRef<str>>(&self, iso2s: &[S]) -> Result<Catalog> {
        let mut wanted = HashSet::with_capacity(iso2s.len());
        for iso2 in iso2s {
            let iso2 = iso2.as_ref().to_ascii_lowercase();
            if !self.iso2_index.contains_key(&iso2) {
                return Err(CatalogError::UnknownCountry(iso2));
            }
            wanted.insert(iso2);
        }
        let countries = self
            .countries
            .iter()
            .filter(|country| wanted.contains(country.iso2()))
            .cloned()
            .collect();
        Catalog::new(countries)
    }

    /// Resolves a preferred-countries list, keeping the caller's order.
    /// Unknown codes are dropped.
    pub fn preferred<S: AsRef<str>>(&self, iso2s: &[S]) -> Vec<Country> {
        iso2s
            .iter()
            .filter_map(|iso2| {
                let found = self.get(iso2.as_ref());
                if found.is_none() {
                    warn!("Unknown preferred country {:?} ignored", iso2.as_ref());
                }
                found.cloned()
            })
            .collect()
    }
}

fn validate_country(country: &Country) -> Result<()> {
    let iso2 = country.iso2();
    if iso2.len() != 2 || !iso2.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CatalogError::InvalidIso2(iso2.to_owned()));
    }
    let dial_code = country.dial_code();
    if dial_code.is_empty() || !dial_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidDialCode {
            iso2: iso2.to_owned(),
            dial_code: dial_code.to_owned(),
        });
    }
    if let Some(area_code) = country
        .area_codes()
        .iter()
        .find(|code| code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(CatalogError::InvalidAreaCode {
            iso2: iso2.to_owned(),
            area_code: area_code.to_owned(),
        });
    }
    Ok(())
}

fn build_iso2_index(countries: &[Country]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(countries.len());
    for (position, country) in countries.iter().enumerate() {
        if index.insert(country.iso2().to_owned(), position).is_some() {
            return Err(CatalogError::DuplicateIso2(country.iso2().to_owned()));
        }
    }
    Ok(index)
}
