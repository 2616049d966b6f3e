use std::time::Duration;

pub const PLUS_SIGN: &'static str = "+";
/// Template character that consumes exactly one input digit.
pub const DIGIT_PLACEHOLDER: char = '.';

/// Number of leading digits probed against the area code index.
pub const AREA_CODE_PROBE_LENGTH: usize = 4;
/// While typing, only this many leading digits are used to guess the country.
pub const MAX_DIGITS_FOR_COUNTRY_GUESS: usize = 6;
/// Priority of the empty starting candidate when folding over the catalog.
/// Any real country outranks it.
pub const SENTINEL_PRIORITY: u32 = 10001;

/// Numbers with fewer digits than this are never masked.
pub const MIN_DIGITS_FOR_FORMATTING: usize = 2;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
