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

use std::{fmt, time::Instant};

use log::{debug, error, warn};
use regex::NoExpand;

use super::{
    catalog::Catalog,
    country::Country,
    debounce::{SearchDebouncer, SearchTicket},
    enums::{Key, KeyPress},
    errors::CatalogError,
    formatter::{is_empty_number, TemplateFormatter},
    helper_constants::{MAX_DIGITS_FOR_COUNTRY_GUESS, PLUS_SIGN},
    navigation::{advance_highlight, combined_index_of, country_at, Direction},
    options::InputOptions,
    resolver::resolve_country,
    search::search_by_name,
    validity::PermissiveValidator,
};
use crate::{
    interfaces::{NumberFormatter, NumberValidator},
    regexp_cache::RegexCache,
    string_util::{extract_digits, prefix_chars},
};

/// Result of an edit: what the field shows now and for which country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    pub formatted_number: String,
    pub country: Country,
}

/// What a key press did to the open country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The list is closed or the key means nothing to it.
    Ignored,
    HighlightMoved(usize),
    /// Enter on the highlighted country. `None` when it was already selected.
    CountrySelected(Option<InputChange>),
    Closed,
    /// The key went into the type-ahead query; the search runs once the
    /// ticket is due (see [`PhoneInput::poll_search`]).
    SearchScheduled(SearchTicket),
}

/// Headless state of an international phone field.
///
/// Owns the selection state (selected country, formatted number, highlight
/// position, open list) and updates it from user events through the
/// stateless engine functions. Rendering, caret placement and timers belong
/// to the host; time is passed in explicitly.
pub struct PhoneInput {
    catalog: Catalog,
    preferred: Vec<Country>,
    default_iso2: String,
    auto_format: bool,

    selected: Country,
    formatted_number: String,
    highlight_index: usize,
    dropdown_open: bool,
    /// Set after a manual pick so typing does not immediately re-guess.
    freeze_selection: bool,

    search: SearchDebouncer,
    validator: Box<dyn NumberValidator>,
    formatter: Box<dyn NumberFormatter>,
    dial_code_patterns: RegexCache,
}

impl PhoneInput {
    pub fn new(catalog: &Catalog, options: InputOptions) -> Result<Self, CatalogError> {
        Self::with_value(catalog, options, "")
    }

    /// Creates the field pre-filled with `value`; the country is guessed
    /// from its digits.
    pub fn with_value(catalog: &Catalog, options: InputOptions, value: &str) -> Result<Self, CatalogError> {
        let catalog = match &options.only_countries {
            Some(only) => catalog.restricted_to(only)?,
            None => catalog.clone(),
        };
        let preferred = catalog.preferred(&options.preferred_countries);
        let default_iso2 = match options.default_country.as_deref().and_then(|iso2| catalog.get(iso2)) {
            Some(country) => country.iso2().to_owned(),
            None => {
                if let Some(unknown) = &options.default_country {
                    warn!("Unknown default country {:?}, using {}", unknown, catalog.first().iso2());
                }
                catalog.first().iso2().to_owned()
            }
        };
        let selected = catalog.first().clone();

        let mut input = Self {
            catalog,
            preferred,
            default_iso2,
            auto_format: options.auto_format,
            selected,
            formatted_number: String::new(),
            highlight_index: 0,
            dropdown_open: false,
            freeze_selection: false,
            search: SearchDebouncer::new(options.search_debounce),
            validator: Box::new(PermissiveValidator),
            formatter: Box::new(TemplateFormatter),
            dial_code_patterns: RegexCache::with_capacity(8),
        };
        input.apply_value(value, true);
        Ok(input)
    }

    pub fn with_validator(mut self, validator: impl NumberValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Replaces the template formatter and re-renders the current number.
    pub fn with_formatter(mut self, formatter: impl NumberFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        let digits = extract_digits(&self.formatted_number);
        if !digits.is_empty() {
            self.formatted_number = self.render(&digits, self.selected.format());
        }
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn preferred_countries(&self) -> &[Country] {
        &self.preferred
    }

    pub fn selected_country(&self) -> &Country {
        &self.selected
    }

    pub fn default_country(&self) -> &Country {
        self.catalog
            .get(&self.default_iso2)
            .unwrap_or_else(|| self.catalog.first())
    }

    /// What the field displays right now; may be a bare `"+"` while typing.
    pub fn formatted_number(&self) -> &str {
        &self.formatted_number
    }

    /// The number as the host should read it: empty instead of a bare `"+"`.
    pub fn number(&self) -> &str {
        if is_empty_number(&self.formatted_number) {
            ""
        } else {
            &self.formatted_number
        }
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight_index
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn is_selection_frozen(&self) -> bool {
        self.freeze_selection
    }

    /// Length of the rendered list: preferred countries, then the catalog.
    pub fn list_len(&self) -> usize {
        self.preferred.len() + self.catalog.len()
    }

    /// Runs the configured validator on the digits of the current number.
    pub fn is_valid(&self) -> bool {
        self.validator
            .is_valid(&extract_digits(&self.formatted_number), self.catalog.countries())
    }

    /// Replaces the value from outside, e.g. a controlled field receiving a
    /// new value. The guessed country is taken only when it differs from
    /// the selected one in both iso2 and dial code.
    pub fn set_value(&mut self, value: &str) {
        self.apply_value(value, false);
    }

    fn apply_value(&mut self, value: &str, initial: bool) {
        let digits = extract_digits(value);
        let current = if initial { None } else { Some(&self.selected) };
        let guess = resolve_country(&digits, &self.catalog, current, Some(self.default_country())).clone();
        let switch = initial
            || (!value.is_empty()
                && !guess.is_same(&self.selected)
                && guess.dial_code() != self.selected.dial_code());
        if switch {
            self.selected = guess;
        }
        let formatted = self.render(&digits, self.selected.format());
        self.formatted_number = if is_empty_number(&formatted) { String::new() } else { formatted };
        self.highlight_index = self.selected_index();
        debug!("Value set to {:?} for {}", self.formatted_number, self.selected.iso2());
    }

    /// Handles the raw content of the field after an edit.
    ///
    /// Returns `None` if nothing changed. The country is re-guessed from the
    /// leading digits unless it was picked by hand and the typed digits still
    /// cover its dial code.
    pub fn handle_input(&mut self, raw: &str) -> Option<InputChange> {
        if raw == self.formatted_number {
            return None;
        }

        let mut formatted = PLUS_SIGN.to_owned();
        if !raw.is_empty() {
            let digits = extract_digits(raw);
            if !self.freeze_selection || self.selected.dial_code().len() > digits.len() {
                let guess = self
                    .guess_country(prefix_chars(&digits, MAX_DIGITS_FOR_COUNTRY_GUESS))
                    .clone();
                self.selected = guess;
                self.freeze_selection = false;
            }
            formatted = self.render(&digits, self.selected.format());
        }

        self.formatted_number = formatted;
        debug!("Input {:?} shown as {:?} ({})", raw, self.formatted_number, self.selected.iso2());
        Some(self.change())
    }

    /// Picks a country by hand.
    ///
    /// The dial code at the start of the number is swapped for the new one
    /// and the number is re-rendered with the new template. The pick is
    /// frozen until the user deletes into the dial code. Picking the already
    /// selected country only closes the list and returns `None`.
    pub fn select_country(&mut self, iso2: &str) -> Option<InputChange> {
        let Some(next) = self.catalog.get(iso2).cloned() else {
            warn!("Cannot select unknown country {:?}", iso2);
            return None;
        };
        self.close_dropdown();
        if next.is_same(&self.selected) {
            return None;
        }

        let replaced = self.replace_dial_code(next.dial_code());
        let digits = extract_digits(&replaced);
        let mut formatted = self.render(&digits, next.format());
        if is_empty_number(&formatted) {
            formatted = fast_cat::concat_str!(PLUS_SIGN, next.dial_code());
        }

        self.selected = next;
        self.freeze_selection = true;
        self.formatted_number = formatted;
        Some(self.change())
    }

    /// Field gained focus. An empty field is filled with `+<dial code>`.
    /// Returns the number a focus listener should receive.
    pub fn focus(&mut self) -> String {
        let dial = fast_cat::concat_str!(PLUS_SIGN, self.selected.dial_code());
        if self.formatted_number.is_empty() || is_empty_number(&self.formatted_number) {
            self.formatted_number = dial.clone();
            return dial;
        }
        self.formatted_number.clone()
    }

    /// Field lost focus. A field holding only `+<dial code>` is cleared.
    /// Returns the number a blur listener should receive.
    pub fn blur(&mut self) -> String {
        if self.formatted_number == fast_cat::concat_str!(PLUS_SIGN, self.selected.dial_code()) {
            self.formatted_number.clear();
        }
        self.formatted_number.clone()
    }

    /// Opens or closes the list and returns whether it is open. Opening
    /// highlights the selected country.
    pub fn toggle_dropdown(&mut self) -> bool {
        if self.dropdown_open {
            self.close_dropdown();
        } else {
            self.dropdown_open = true;
            self.highlight_index = self.selected_index();
        }
        self.dropdown_open
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
        self.search.cancel();
    }

    /// Keyboard handling while the list is open.
    pub fn handle_key(&mut self, key: KeyPress, now: Instant) -> KeyOutcome {
        if !self.dropdown_open {
            return KeyOutcome::Ignored;
        }

        match key {
            KeyPress::Named(Key::Up) => self.move_highlight(Direction::Up),
            KeyPress::Named(Key::Down) => self.move_highlight(Direction::Down),
            KeyPress::Named(Key::Enter) => {
                let highlighted = country_at(&self.preferred, self.catalog.countries(), self.highlight_index)
                    .map(|country| country.iso2().to_owned());
                match highlighted {
                    Some(iso2) => KeyOutcome::CountrySelected(self.select_country(&iso2)),
                    None => KeyOutcome::Ignored,
                }
            }
            KeyPress::Named(Key::Esc) => {
                self.close_dropdown();
                KeyOutcome::Closed
            }
            other => match other.query_char() {
                Some(symbol) => KeyOutcome::SearchScheduled(self.search.push(symbol, now)),
                None => KeyOutcome::Ignored,
            },
        }
    }

    /// When the host timer should call [`PhoneInput::poll_search`].
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Runs the type-ahead search if it is due. The first country whose
    /// name starts with the query, or the first catalog entry when none
    /// does, gets highlighted. Returns the new highlight index.
    pub fn poll_search(&mut self, now: Instant) -> Option<usize> {
        let query = self.search.fire(now)?;
        let candidate = search_by_name(&query, self.catalog.countries())
            .unwrap_or_else(|| self.catalog.first());
        let index = self.catalog.index_of(candidate.iso2()).unwrap_or(0) + self.preferred.len();
        debug!("Type-ahead {:?} highlighted {}", query, candidate.iso2());
        self.highlight_index = index;
        Some(index)
    }

    fn move_highlight(&mut self, direction: Direction) -> KeyOutcome {
        self.highlight_index = advance_highlight(self.highlight_index, direction, self.list_len());
        KeyOutcome::HighlightMoved(self.highlight_index)
    }

    fn guess_country(&self, digits: &str) -> &Country {
        resolve_country(digits, &self.catalog, Some(&self.selected), Some(self.default_country()))
    }

    fn render(&self, digits: &str, template: Option<&str>) -> String {
        self.formatter.format(digits, template, self.auto_format)
    }

    fn selected_index(&self) -> usize {
        combined_index_of(&self.preferred, self.catalog.countries(), self.selected.iso2()).unwrap_or(0)
    }

    /// Swaps a leading `+<current dial code>` (or else the first `+`) for
    /// `+<dial_code>`.
    fn replace_dial_code(&self, dial_code: &str) -> String {
        let pattern = fast_cat::concat_str!(r"^(\+", self.selected.dial_code(), r")|\+");
        let replacement = fast_cat::concat_str!(PLUS_SIGN, dial_code);
        match self.dial_code_patterns.get_regex(&pattern) {
            Ok(regexp) => regexp
                .replace(&self.formatted_number, NoExpand(&replacement))
                .into_owned(),
            Err(err) => {
                error!("Could not build dial code pattern {}: {}", pattern, err);
                self.formatted_number.clone()
            }
        }
    }

    fn change(&self) -> InputChange {
        InputChange {
            formatted_number: self.formatted_number.clone(),
            country: self.selected.clone(),
        }
    }
}

impl fmt::Debug for PhoneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneInput")
            .field("selected", &self.selected.iso2())
            .field("formatted_number", &self.formatted_number)
            .field("highlight_index", &self.highlight_index)
            .field("dropdown_open", &self.dropdown_open)
            .field("freeze_selection", &self.freeze_selection)
            .finish_non_exhaustive()
    }
}
