use super::country::Country;

/// Direction of a single highlight step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the start of the list.
    Up,
    /// Towards the end of the list.
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Moves the highlight one step. Stepping past either end is a no-op, the
/// list does not wrap around.
pub fn advance_highlight(current: usize, direction: Direction, list_length: usize) -> usize {
    current
        .checked_add_signed(direction.offset())
        .filter(|next| *next < list_length)
        .unwrap_or(current)
}

/// Position of `iso2` in the rendered list: preferred countries first, then
/// the whole catalog. A preferred country is found in the preferred part.
pub fn combined_index_of(preferred: &[Country], countries: &[Country], iso2: &str) -> Option<usize> {
    preferred
        .iter()
        .chain(countries)
        .position(|country| country.iso2() == iso2)
}

/// Country at `index` of the rendered list.
pub fn country_at<'a>(preferred: &'a [Country], countries: &'a [Country], index: usize) -> Option<&'a Country> {
    preferred.iter().chain(countries).nth(index)
}
