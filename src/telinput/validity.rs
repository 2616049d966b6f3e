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

use super::country::Country;

/// Permissive default validator.
///
/// A number is plausible when it starts with some country's dial code, or
/// is itself the beginning of one (the user is still typing the code).
/// This says nothing about the national numbering plan; plug a stricter
/// [`crate::NumberValidator`] in when that matters.
pub fn is_plausible(number: &str, countries: &[Country]) -> bool {
    countries.iter().any(|country| {
        number.starts_with(country.dial_code()) || country.dial_code().starts_with(number)
    })
}

/// [`is_plausible`] as a [`crate::NumberValidator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveValidator;

impl crate::NumberValidator for PermissiveValidator {
    fn is_valid(&self, number: &str, countries: &[Country]) -> bool {
        is_plausible(number, countries)
    }
}
