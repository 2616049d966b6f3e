use super::country::Country;

/// Type-ahead lookup: the first country, in list order, whose name starts
/// with `query` ignoring case. An empty query matches nothing.
///
/// Only the base list is searched. When the rendered list starts with
/// preferred countries, add their count to the position of the match.
pub fn search_by_name<'a>(query: &str, countries: &'a [Country]) -> Option<&'a Country> {
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    countries
        .iter()
        .find(|country| country.name().to_lowercase().starts_with(&query))
}
