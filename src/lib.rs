mod interfaces;
mod telinput;
mod generated;
mod regexp_cache;
mod regex_based_validator;
pub(crate) mod regex_util;
pub(crate) mod string_util;

pub use interfaces::{NumberFormatter, NumberValidator};
pub use regexp_cache::InvalidRegexError;
pub use regex_based_validator::RegexBasedValidator;
pub use string_util::extract_digits;
pub use telinput::{
    catalog::{AreaCodeIndex, Catalog},
    country::Country,
    debounce::{SearchDebouncer, SearchTicket},
    enums::{Key, KeyPress},
    errors::CatalogError,
    formatter::{format_number, is_empty_number, TemplateFormatter},
    navigation::{advance_highlight, combined_index_of, country_at, Direction},
    options::InputOptions,
    phone_input::{InputChange, KeyOutcome, PhoneInput},
    resolver::resolve_country,
    search::search_by_name,
    validity::{is_plausible, PermissiveValidator},
    COUNTRY_CATALOG,
};

#[cfg(test)]
mod tests;
