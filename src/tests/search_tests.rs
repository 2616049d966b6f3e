use crate::{search_by_name, Country};

use super::test_catalog::test_catalog;

fn two_countries() -> Vec<Country> {
    vec![
        Country::new("ua", "Ukraine", "380"),
        Country::new("us", "United States", "1"),
    ]
}

#[test]
fn empty_query_matches_nothing() {
    assert_eq!(search_by_name("", &two_countries()), None);
}

#[test]
fn prefix_match_ignores_case() {
    let countries = two_countries();
    assert_eq!(search_by_name("uni", &countries).map(Country::iso2), Some("us"));
    assert_eq!(search_by_name("UNI", &countries).map(Country::iso2), Some("us"));
    assert_eq!(search_by_name("Uk", &countries).map(Country::iso2), Some("ua"));
    assert_eq!(search_by_name("un", &countries).map(Country::iso2), Some("us"));
    // prefix only, no substring matches
    assert_eq!(search_by_name("states", &countries), None);
    assert_eq!(search_by_name("x", &countries), None);
}

#[test]
fn first_match_in_list_order_wins() {
    let catalog = test_catalog();
    let found = search_by_name("UNITED ", catalog.countries()).unwrap();
    assert_eq!(found.iso2(), "gb");
    let found = search_by_name("united s", catalog.countries()).unwrap();
    assert_eq!(found.iso2(), "us");
}
