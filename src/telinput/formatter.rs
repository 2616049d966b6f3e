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

use super::helper_constants::{DIGIT_PLACEHOLDER, MIN_DIGITS_FOR_FORMATTING, PLUS_SIGN};

/// Renders `digits` through a country template.
///
/// `digits` must already be stripped of everything but digits. A bare `"+"`
/// means "nothing entered yet".
///
/// Unmasked output (`"+" + digits`) is returned for fewer than two digits,
/// a missing or empty template, or when `auto_format` is off. Otherwise each
/// `.` of the template takes the next digit and every other template
/// character is copied as is. Walking stops as soon as the digits run out,
/// so literals after the last filled placeholder are never emitted. Digits
/// left over once the template is exhausted are appended raw.
///
/// Templates carry their own leading `+`.
pub fn format_number(digits: &str, template: Option<&str>, auto_format: bool) -> String {
    if digits.is_empty() {
        return PLUS_SIGN.to_owned();
    }

    let template = match template {
        Some(template) if !template.is_empty() && auto_format => template,
        _ => return fast_cat::concat_str!(PLUS_SIGN, digits),
    };
    if digits.chars().count() < MIN_DIGITS_FOR_FORMATTING {
        return fast_cat::concat_str!(PLUS_SIGN, digits);
    }

    let mut formatted = String::with_capacity(template.len() + digits.len());
    let mut remaining = digits.chars().peekable();
    for symbol in template.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if symbol == DIGIT_PLACEHOLDER {
            formatted.extend(remaining.next());
        } else {
            formatted.push(symbol);
        }
    }
    formatted.extend(remaining);
    formatted
}

/// `true` for the bare `"+"` that [`format_number`] returns for no digits.
/// Callers show an empty field instead.
pub fn is_empty_number(formatted: &str) -> bool {
    formatted == PLUS_SIGN
}

/// [`format_number`] as a [`crate::NumberFormatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFormatter;

impl crate::NumberFormatter for TemplateFormatter {
    fn format(&self, digits: &str, template: Option<&str>, auto_format: bool) -> String {
        format_number(digits, template, auto_format)
    }
}
