use crate::{format_number, resolve_country, search_by_name, COUNTRY_CATALOG};

use super::init_logging;

fn resolve(digits: &str) -> &'static str {
    resolve_country(digits, &COUNTRY_CATALOG, None, None).iso2()
}

#[test]
fn compiled_catalog_loads() {
    init_logging();
    assert!(COUNTRY_CATALOG.len() > 200);
    assert_eq!(COUNTRY_CATALOG.first().iso2(), "af");
    assert!(!COUNTRY_CATALOG.area_codes().is_empty());
}

#[test]
fn compiled_catalog_resolves_shared_dial_codes() {
    init_logging();
    assert_eq!(resolve("1"), "us");
    assert_eq!(resolve("1212"), "us");
    assert_eq!(resolve("1204"), "ca");
    assert_eq!(resolve("1416555"), "ca");
    assert_eq!(resolve("1809"), "do");
    assert_eq!(resolve("1787"), "pr");
    assert_eq!(resolve("1268"), "ag");
    assert_eq!(resolve("1876"), "jm");
    assert_eq!(resolve("7"), "ru");
    assert_eq!(resolve("44"), "gb");
    assert_eq!(resolve("358"), "fi");
    assert_eq!(resolve("39"), "it");
    assert_eq!(resolve("380"), "ua");
    assert_eq!(resolve(""), "af");
}

#[test]
fn compiled_catalog_formats_us_numbers() {
    let us = COUNTRY_CATALOG.get("US").unwrap();
    assert_eq!(format_number("17025550123", us.format(), true), "+1 (702) 555-0123");
}

#[test]
fn compiled_catalog_type_ahead() {
    let found = search_by_name("united s", COUNTRY_CATALOG.countries()).unwrap();
    assert_eq!(found.iso2(), "us");
    let found = search_by_name("ger", COUNTRY_CATALOG.countries()).unwrap();
    assert_eq!(found.iso2(), "de");
}
