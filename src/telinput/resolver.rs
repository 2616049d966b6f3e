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

use log::trace;

use super::{
    catalog::Catalog,
    country::Country,
    helper_constants::{AREA_CODE_PROBE_LENGTH, SENTINEL_PRIORITY},
};
use crate::string_util::prefix_chars;

/// Guesses the country a partially typed number belongs to.
///
/// * An empty (or whitespace only) input yields `default_country`, or the
///   first catalog entry when no default is given.
/// * If the first [`AREA_CODE_PROBE_LENGTH`] digits hit the area code index,
///   the first listed owner wins, unless `current_country` is listed too:
///   then the current country is kept so the selection does not flip while
///   the input stays ambiguous.
/// * Otherwise the country with the longest dial code that prefixes the
///   input wins; lower priority breaks ties between equal lengths.
///
/// Pass `None` as `current_country` for a stateless lookup.
pub fn resolve_country<'a>(
    digits: &str,
    catalog: &'a Catalog,
    current_country: Option<&'a Country>,
    default_country: Option<&'a Country>,
) -> &'a Country {
    let fallback = default_country.unwrap_or_else(|| catalog.first());
    if digits.trim().is_empty() {
        return fallback;
    }

    let probe = prefix_chars(digits, AREA_CODE_PROBE_LENGTH);
    if let Some(owners) = catalog.area_codes().get(probe) {
        if let Some(current) = current_country {
            if owners.iter().any(|iso2| iso2 == current.iso2()) {
                trace!("Keeping {} for ambiguous area code prefix {}", current.iso2(), probe);
                return current;
            }
        }
        if let Some(head) = owners.first().and_then(|iso2| catalog.get(iso2)) {
            trace!("Area code prefix {} resolved to {}", probe, head.iso2());
            return head;
        }
    }

    match best_dial_code_match(digits, catalog.countries()) {
        Some(country) => {
            trace!("Dial code match for {}: {}", digits, country.iso2());
            country
        }
        None => {
            trace!("No dial code prefixes {}, falling back to {}", digits, fallback.iso2());
            fallback
        }
    }
}

/// Folds the catalog into the most specific country whose dial code is a
/// prefix of `digits`.
fn best_dial_code_match<'a>(digits: &str, countries: &'a [Country]) -> Option<&'a Country> {
    countries
        .iter()
        .filter(|country| digits.starts_with(country.dial_code()))
        .fold(None, |best: Option<&Country>, candidate| {
            let (best_len, best_priority) = best
                .map(|country| (country.dial_code().len(), country.priority()))
                .unwrap_or((0, SENTINEL_PRIORITY));
            let candidate_len = candidate.dial_code().len();
            if candidate_len > best_len
                || (candidate_len == best_len && candidate.priority() < best_priority)
            {
                Some(candidate)
            } else {
                best
            }
        })
}
