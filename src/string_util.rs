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

/// Keeps only the digits of raw user input.
///
/// Any Unicode decimal digit (full-width, Arabic-Indic, ...) is first
/// normalized to its ASCII form, so `"+７ (９)"` gives `"79"`.
pub fn extract_digits(raw: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(raw);
    normalized.chars().filter(char::is_ascii_digit).collect()
}

/// Returns at most the first `count` characters of `s` as a slice.
pub fn prefix_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use crate::string_util::{extract_digits, prefix_chars};

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("+1 (702) 123-4567"), "17021234567");
        assert_eq!(extract_digits("+４４ 20"), "4420");
        assert_eq!(extract_digits("abc"), "");
        assert_eq!(extract_digits(""), "");
    }

    #[test]
    fn test_prefix_chars() {
        assert_eq!(prefix_chars("1234567", 4), "1234");
        assert_eq!(prefix_chars("12", 4), "12");
        assert_eq!(prefix_chars("", 4), "");
        assert_eq!(prefix_chars("１２３", 2), "１２");
    }
}
