use crate::Country;

/// Decides whether a number (digits only, no `+`) is acceptable.
///
/// [`crate::PermissiveValidator`] is the default; any
/// `Fn(&str, &[Country]) -> bool` closure can be used instead.
pub trait NumberValidator {
    fn is_valid(&self, number: &str, countries: &[Country]) -> bool;
}

/// Renders digits for display. Implementations follow the contract of
/// [`crate::format_number`]: the result starts with `+` and a bare `"+"`
/// means no digits.
pub trait NumberFormatter {
    fn format(&self, digits: &str, template: Option<&str>, auto_format: bool) -> String;
}

impl<F> NumberValidator for F
where
    F: Fn(&str, &[Country]) -> bool,
{
    fn is_valid(&self, number: &str, countries: &[Country]) -> bool {
        self(number, countries)
    }
}

impl<F> NumberFormatter for F
where
    F: Fn(&str, Option<&str>, bool) -> String,
{
    fn format(&self, digits: &str, template: Option<&str>, auto_format: bool) -> String {
        self(digits, template, auto_format)
    }
}
