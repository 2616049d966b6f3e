use crate::{resolve_country, Catalog, Country};

use super::{init_logging, iso2::Iso2, test_catalog::test_catalog};

fn resolve(catalog: &Catalog, digits: &str, current: Option<&str>, default: Option<&str>) -> String {
    let current = current.map(|iso2| catalog.get(iso2).unwrap());
    let default = default.map(|iso2| catalog.get(iso2).unwrap());
    resolve_country(digits, catalog, current, default).iso2().to_owned()
}

#[test]
fn empty_input_gives_default_country() {
    init_logging();
    let catalog = test_catalog();
    assert_eq!(resolve(&catalog, "", None, Some(Iso2::us())), Iso2::us());
    assert_eq!(resolve(&catalog, "   ", None, Some(Iso2::us())), Iso2::us());
    // without a default the first catalog entry is used
    assert_eq!(resolve(&catalog, "", None, None), Iso2::ag());
    // current country plays no role for empty input
    assert_eq!(resolve(&catalog, "", Some(Iso2::gb()), Some(Iso2::de())), Iso2::de());
}

#[test]
fn longest_dial_code_wins() {
    init_logging();
    let catalog = test_catalog();
    assert_eq!(resolve(&catalog, "1268", None, None), Iso2::ag());
    assert_eq!(resolve(&catalog, "12684641234", None, None), Iso2::ag());
    // "126" is not covered by 1268 yet
    assert_eq!(resolve(&catalog, "126", None, None), Iso2::us());
    assert_eq!(resolve(&catalog, "380", None, None), Iso2::ua());
}

#[test]
fn lower_priority_breaks_ties() {
    init_logging();
    let catalog = test_catalog();
    assert_eq!(resolve(&catalog, "1", None, None), Iso2::us());
    assert_eq!(resolve(&catalog, "1702555", None, None), Iso2::us());
    assert_eq!(resolve(&catalog, "44", None, None), Iso2::gb());
    assert_eq!(resolve(&catalog, "7", None, None), Iso2::ru());
    assert_eq!(resolve(&catalog, "77", None, None), Iso2::ru());
}

#[test]
fn longer_prefix_beats_better_priority() {
    let catalog = Catalog::new(vec![
        Country::new("aa", "Parent", "1").with_priority(0),
        Country::new("bb", "Child", "12").with_priority(5),
    ])
    .unwrap();
    assert_eq!(resolve(&catalog, "123", None, None), "bb");
    assert_eq!(resolve(&catalog, "13", None, None), "aa");
}

#[test]
fn equal_lengths_pick_lowest_priority_value() {
    let catalog = Catalog::new(vec![
        Country::new("bb", "Second", "7").with_priority(2),
        Country::new("aa", "First", "7").with_priority(1),
    ])
    .unwrap();
    assert_eq!(resolve(&catalog, "7", None, None), "aa");

    // with equal priorities the earlier catalog entry stays
    let catalog = Catalog::new(vec![
        Country::new("bb", "Second", "7").with_priority(1),
        Country::new("aa", "First", "7").with_priority(1),
    ])
    .unwrap();
    assert_eq!(resolve(&catalog, "79", None, None), "bb");
}

#[test]
fn unknown_prefix_falls_back_to_default() {
    init_logging();
    let catalog = test_catalog();
    assert_eq!(resolve(&catalog, "999", None, Some(Iso2::de())), Iso2::de());
    // "38" is only the start of Ukraine's dial code
    assert_eq!(resolve(&catalog, "38", None, Some(Iso2::de())), Iso2::de());
    assert_eq!(resolve(&catalog, "0", None, None), Iso2::ag());
}

#[test]
fn area_code_selects_country() {
    init_logging();
    let catalog = test_catalog();
    assert_eq!(resolve(&catalog, "1204", None, None), Iso2::ca());
    assert_eq!(resolve(&catalog, "12045551234", None, None), Iso2::ca());
    assert_eq!(resolve(&catalog, "1809555", None, None), Iso2::r#do());
    // 212 is not a registered area code
    assert_eq!(resolve(&catalog, "1212555", None, None), Iso2::us());
    // fewer than four digits never hit the area code index
    assert_eq!(resolve(&catalog, "120", None, None), Iso2::us());
}

#[test]
fn area_code_keeps_current_country_when_listed() {
    init_logging();
    let catalog = test_catalog();
    // 1905 belongs to Canada first, then the Dominican Republic
    assert_eq!(resolve(&catalog, "1905", None, None), Iso2::ca());
    assert_eq!(resolve(&catalog, "1905", Some(Iso2::r#do()), None), Iso2::r#do());
    assert_eq!(resolve(&catalog, "19055551234", Some(Iso2::r#do()), None), Iso2::r#do());
    // current country not listed for the prefix: head of the list wins
    assert_eq!(resolve(&catalog, "1905", Some(Iso2::us()), None), Iso2::ca());
    assert_eq!(resolve(&catalog, "1809", Some(Iso2::ca()), None), Iso2::r#do());
}

#[test]
fn current_country_is_ignored_outside_area_codes() {
    let catalog = test_catalog();
    assert_eq!(resolve(&catalog, "44", Some(Iso2::gg()), None), Iso2::gb());
    assert_eq!(resolve(&catalog, "7701", Some(Iso2::kz()), None), Iso2::ru());
}

#[test]
fn result_is_deterministic() {
    let catalog = test_catalog();
    for digits in ["1", "1204", "1905", "44", "380", "999"] {
        let first = resolve(&catalog, digits, None, Some(Iso2::de()));
        let second = resolve(&catalog, digits, None, Some(Iso2::de()));
        assert_eq!(first, second, "unstable result for {digits}");
    }
}
