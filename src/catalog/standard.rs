use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::tables::{MEASURES, Measure, UnitDef, measure};
use super::{CatalogError, Category, UnitCatalog};
use crate::models::UnitDescriptor;

/// Abbreviation -> (owning measure, unit). Abbreviations are unique across
/// all categories, so one flat index is enough.
static UNIT_INDEX: Lazy<HashMap<&'static str, (&'static Measure, &'static UnitDef)>> =
    Lazy::new(|| {
        let mut index = HashMap::new();
        for m in &MEASURES {
            for u in m.units {
                index.insert(u.abbr, (m, u));
            }
        }
        index
    });

/// Built-in catalog covering length, area, mass, volume, time, temperature,
/// speed, angle and digital storage
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl StandardCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Category a unit abbreviation belongs to, if known
    pub fn category_of(&self, abbr: &str) -> Option<Category> {
        UNIT_INDEX.get(abbr).map(|(m, _)| m.category)
    }

    /// Descriptor for a single unit, if known
    pub fn describe(&self, abbr: &str) -> Option<UnitDescriptor> {
        UNIT_INDEX.get(abbr).map(|(_, u)| UnitDescriptor::new(u.abbr, u.name))
    }

    fn lookup(abbr: &str) -> Result<(&'static Measure, &'static UnitDef), CatalogError> {
        UNIT_INDEX.get(abbr).copied().ok_or_else(|| CatalogError::UnknownUnit(abbr.to_string()))
    }
}

impl UnitCatalog for StandardCatalog {
    fn list_units(&self, category: Category) -> Vec<UnitDescriptor> {
        measure(category).units.iter().map(|u| UnitDescriptor::new(u.abbr, u.name)).collect()
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, CatalogError> {
        let (from_measure, from_unit) = Self::lookup(from)?;
        let (to_measure, to_unit) = Self::lookup(to)?;

        if from_measure.category != to_measure.category {
            return Err(CatalogError::IncompatibleUnits {
                from: from.to_string(),
                from_category: from_measure.category,
                to: to.to_string(),
                to_category: to_measure.category,
            });
        }

        // Same unit: skip the anchor round trip so the value comes back bit-exact
        if from == to {
            return Ok(value);
        }

        let mut result = value * from_unit.to_anchor - from_unit.anchor_shift;
        if let Some(bridge) = from_measure.bridge(from_unit.system, to_unit.system) {
            result = bridge.apply(result);
        }
        result += to_unit.anchor_shift;

        Ok(result / to_unit.to_anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: f64, from: &str, to: &str) -> f64 {
        StandardCatalog.convert(value, from, to).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!((actual - expected).abs() < tolerance, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_meters_to_feet() {
        assert_close(convert(1.0, "m", "ft"), 3.28084);
    }

    #[test]
    fn test_metric_within_system() {
        assert_close(convert(2.5, "km", "m"), 2500.0);
        assert_close(convert(1500.0, "g", "kg"), 1.5);
    }

    #[test]
    fn test_imperial_within_system() {
        assert_close(convert(1.0, "mi", "ft"), 5280.0);
        assert_close(convert(1.0, "gal", "qt"), 4.0);
    }

    #[test]
    fn test_temperature_is_affine() {
        assert_close(convert(100.0, "C", "F"), 212.0);
        assert_close(convert(32.0, "F", "C"), 0.0);
        assert_close(convert(0.0, "C", "K"), 273.15);
        assert_close(convert(0.0, "K", "R"), 0.0);
        assert_close(convert(-40.0, "F", "C"), -40.0);
    }

    #[test]
    fn test_digital_bits_and_bytes() {
        assert_close(convert(8.0, "b", "B"), 1.0);
        assert_close(convert(1.0, "MB", "KB"), 1024.0);
        assert_close(convert(1.0, "KB", "Kb"), 8.0);
    }

    #[test]
    fn test_angle_single_system() {
        assert_close(convert(std::f64::consts::PI, "rad", "deg"), 180.0);
        assert_close(convert(1.0, "deg", "arcsec"), 3600.0);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert(0.1, "ft-us", "ft-us"), 0.1);
    }

    #[test]
    fn test_unknown_unit_error() {
        let err = StandardCatalog.convert(1.0, "parsec", "m").unwrap_err();
        assert_eq!(err, CatalogError::UnknownUnit("parsec".to_string()));
    }

    #[test]
    fn test_cross_category_error() {
        let err = StandardCatalog.convert(1.0, "kg", "m").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::IncompatibleUnits {
                from_category: Category::Mass,
                to_category: Category::Length,
                ..
            }
        ));
        assert!(err.to_string().contains("cannot convert"));
    }

    #[test]
    fn test_list_units_preserves_table_order() {
        let units = StandardCatalog.list_units(Category::Length);
        let abbrs: Vec<&str> = units.iter().map(|u| u.abbreviation.as_str()).collect();
        assert_eq!(abbrs, ["mm", "cm", "m", "km", "in", "yd", "ft-us", "ft", "mi"]);
        assert_eq!(units[2].display_name, "meters");
    }

    #[test]
    fn test_category_of_and_describe() {
        assert_eq!(StandardCatalog.category_of("knot"), Some(Category::Speed));
        assert_eq!(StandardCatalog.category_of("nope"), None);
        assert_eq!(StandardCatalog.describe("ft").map(|u| u.display_name), Some("feet".into()));
    }
}
