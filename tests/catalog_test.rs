/// Property tests over the built-in unit tables
mod common;

use std::collections::HashSet;

use common::assert_close;
use convertr::{CatalogError, Category, StandardCatalog, UnitCatalog};
use proptest::prelude::*;
use proptest::sample::{Index, select};

#[test]
fn test_every_category_has_units() {
    let catalog = StandardCatalog::new();
    for category in Category::ALL {
        let units = catalog.list_units(category);
        assert!(units.len() >= 4, "{category} has too few units");

        let abbrs: HashSet<_> = units.iter().map(|u| u.abbreviation.as_str()).collect();
        assert_eq!(abbrs.len(), units.len(), "{category} has duplicate abbreviations");
    }
}

#[test]
fn test_units_convert_within_their_category() {
    let catalog = StandardCatalog::new();
    for category in Category::ALL {
        let units = catalog.list_units(category);
        let first = &units[0].abbreviation;
        for unit in &units {
            assert!(catalog.convert(1.0, first, &unit.abbreviation).is_ok());
        }
    }
}

#[test]
fn test_known_reference_values() {
    let catalog = StandardCatalog::new();
    // Crossing systems goes through the rounded ft/m ratio
    let inch = catalog.convert(1.0, "in", "cm").unwrap();
    assert!((inch - 2.54).abs() < 1e-5, "1 in = {inch} cm");
    assert_close(catalog.convert(1.0, "h", "s").unwrap(), 3600.0);
    assert_close(catalog.convert(1.0, "ac", "ft2").unwrap(), 43_560.0);
    assert_close(catalog.convert(1.0, "GB", "MB").unwrap(), 1024.0);
    assert_close(catalog.convert(37.0, "C", "F").unwrap(), 98.6);
}

#[test]
fn test_units_from_different_categories_are_rejected() {
    let catalog = StandardCatalog::new();
    let err = catalog.convert(1.0, "s", "deg").unwrap_err();
    assert!(matches!(err, CatalogError::IncompatibleUnits { .. }));
}

proptest! {
    #[test]
    fn prop_round_trip_returns_input(
        category in select(Category::ALL.to_vec()),
        from in any::<Index>(),
        to in any::<Index>(),
        value in -1.0e6f64..1.0e6,
    ) {
        let catalog = StandardCatalog::new();
        let units = catalog.list_units(category);
        let from = &units[from.index(units.len())].abbreviation;
        let to = &units[to.index(units.len())].abbreviation;

        let there = catalog.convert(value, from, to).unwrap();
        let back = catalog.convert(there, to, from).unwrap();

        prop_assert!((back - value).abs() <= 1e-6 * value.abs().max(1.0), "{value} -> {there} -> {back}");
    }

    #[test]
    fn prop_identity_conversion_is_exact(
        category in select(Category::ALL.to_vec()),
        unit in any::<Index>(),
        value in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let catalog = StandardCatalog::new();
        let units = catalog.list_units(category);
        let abbr = &units[unit.index(units.len())].abbreviation;

        prop_assert_eq!(catalog.convert(value, abbr, abbr).unwrap(), value);
    }
}
