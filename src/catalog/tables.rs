//! Built-in unit tables.
//!
//! Each category has one or two measurement systems. Every unit carries a
//! factor to its system's anchor unit (and an optional shift for affine
//! scales such as kelvin), and a category with two systems carries the
//! transform between the two anchors.

use std::f64::consts::PI;

use super::Category;

/// Which of a category's measurement systems a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum System {
    /// Metric, or bits for digital
    Primary,
    /// Imperial, or bytes for digital
    Secondary,
}

#[derive(Debug)]
pub(crate) struct UnitDef {
    pub abbr: &'static str,
    pub name: &'static str,
    pub system: System,
    pub to_anchor: f64,
    pub anchor_shift: f64,
}

/// Affine map applied when crossing from one system's anchor to the other's
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bridge {
    pub scale: f64,
    pub offset: f64,
}

impl Bridge {
    const fn ratio(scale: f64) -> Self {
        Self { scale, offset: 0.0 }
    }

    pub fn apply(self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}

#[derive(Debug)]
pub(crate) struct Measure {
    pub category: Category,
    pub units: &'static [UnitDef],
    /// (primary -> secondary, secondary -> primary)
    pub bridges: Option<(Bridge, Bridge)>,
}

impl Measure {
    pub fn bridge(&self, from: System, to: System) -> Option<Bridge> {
        match (from, to, self.bridges) {
            (System::Primary, System::Secondary, Some((forward, _))) => Some(forward),
            (System::Secondary, System::Primary, Some((_, backward))) => Some(backward),
            _ => None,
        }
    }
}

const fn unit(abbr: &'static str, name: &'static str, system: System, to_anchor: f64) -> UnitDef {
    UnitDef { abbr, name, system, to_anchor, anchor_shift: 0.0 }
}

const fn shifted(
    abbr: &'static str,
    name: &'static str,
    system: System,
    to_anchor: f64,
    anchor_shift: f64,
) -> UnitDef {
    UnitDef { abbr, name, system, to_anchor, anchor_shift }
}

use System::{Primary as Metric, Secondary as Imperial};

static LENGTH: [UnitDef; 9] = [
    unit("mm", "millimeters", Metric, 1.0 / 1000.0),
    unit("cm", "centimeters", Metric, 1.0 / 100.0),
    unit("m", "meters", Metric, 1.0),
    unit("km", "kilometers", Metric, 1000.0),
    unit("in", "inches", Imperial, 1.0 / 12.0),
    unit("yd", "yards", Imperial, 3.0),
    unit("ft-us", "US survey feet", Imperial, 1.000002),
    unit("ft", "feet", Imperial, 1.0),
    unit("mi", "miles", Imperial, 5280.0),
];

static AREA: [UnitDef; 10] = [
    unit("mm2", "square millimeters", Metric, 1.0 / 1_000_000.0),
    unit("cm2", "square centimeters", Metric, 1.0 / 10_000.0),
    unit("m2", "square meters", Metric, 1.0),
    unit("ha", "hectares", Metric, 10_000.0),
    unit("km2", "square kilometers", Metric, 1_000_000.0),
    unit("in2", "square inches", Imperial, 1.0 / 144.0),
    unit("yd2", "square yards", Imperial, 9.0),
    unit("ft2", "square feet", Imperial, 1.0),
    unit("ac", "acres", Imperial, 43_560.0),
    unit("mi2", "square miles", Imperial, 27_878_400.0),
];

static MASS: [UnitDef; 8] = [
    unit("mcg", "micrograms", Metric, 1.0 / 1_000_000.0),
    unit("mg", "milligrams", Metric, 1.0 / 1000.0),
    unit("g", "grams", Metric, 1.0),
    unit("kg", "kilograms", Metric, 1000.0),
    unit("mt", "metric tonnes", Metric, 1_000_000.0),
    unit("oz", "ounces", Imperial, 1.0 / 16.0),
    unit("lb", "pounds", Imperial, 1.0),
    unit("t", "tons", Imperial, 2000.0),
];

static VOLUME: [UnitDef; 17] = [
    unit("mm3", "cubic millimeters", Metric, 1.0 / 1_000_000.0),
    unit("cm3", "cubic centimeters", Metric, 1.0 / 1000.0),
    unit("ml", "milliliters", Metric, 1.0 / 1000.0),
    unit("l", "liters", Metric, 1.0),
    unit("kl", "kiloliters", Metric, 1000.0),
    unit("m3", "cubic meters", Metric, 1000.0),
    unit("km3", "cubic kilometers", Metric, 1_000_000_000_000.0),
    unit("tsp", "teaspoons", Imperial, 1.0 / 6.0),
    unit("Tbs", "tablespoons", Imperial, 1.0 / 2.0),
    unit("in3", "cubic inches", Imperial, 0.55411),
    unit("fl-oz", "fluid ounces", Imperial, 1.0),
    unit("cup", "cups", Imperial, 8.0),
    unit("pnt", "pints", Imperial, 16.0),
    unit("qt", "quarts", Imperial, 32.0),
    unit("gal", "gallons", Imperial, 128.0),
    unit("ft3", "cubic feet", Imperial, 957.506),
    unit("yd3", "cubic yards", Imperial, 25_852.7),
];

static TIME: [UnitDef; 10] = [
    unit("ns", "nanoseconds", Metric, 1.0 / 1_000_000_000.0),
    unit("mu", "microseconds", Metric, 1.0 / 1_000_000.0),
    unit("ms", "milliseconds", Metric, 1.0 / 1000.0),
    unit("s", "seconds", Metric, 1.0),
    unit("min", "minutes", Metric, 60.0),
    unit("h", "hours", Metric, 3600.0),
    unit("d", "days", Metric, 86_400.0),
    unit("week", "weeks", Metric, 604_800.0),
    unit("month", "months", Metric, 2_629_800.0),
    unit("year", "years", Metric, 31_557_600.0),
];

static TEMPERATURE: [UnitDef; 4] = [
    unit("C", "degrees Celsius", Metric, 1.0),
    shifted("K", "kelvins", Metric, 1.0, 273.15),
    unit("F", "degrees Fahrenheit", Imperial, 1.0),
    shifted("R", "degrees Rankine", Imperial, 1.0, 459.67),
];

static SPEED: [UnitDef; 5] = [
    unit("m/s", "meters per second", Metric, 3.6),
    unit("km/h", "kilometers per hour", Metric, 1.0),
    unit("m/h", "miles per hour", Imperial, 1.0),
    unit("knot", "knots", Imperial, 1.150779),
    unit("ft/s", "feet per second", Imperial, 0.681818),
];

static ANGLE: [UnitDef; 5] = [
    unit("rad", "radians", Metric, 180.0 / PI),
    unit("deg", "degrees", Metric, 1.0),
    unit("grad", "gradians", Metric, 9.0 / 10.0),
    unit("arcmin", "arcminutes", Metric, 1.0 / 60.0),
    unit("arcsec", "arcseconds", Metric, 1.0 / 3600.0),
];

static DIGITAL: [UnitDef; 10] = [
    unit("b", "bits", Metric, 1.0),
    unit("Kb", "kilobits", Metric, 1024.0),
    unit("Mb", "megabits", Metric, 1_048_576.0),
    unit("Gb", "gigabits", Metric, 1_073_741_824.0),
    unit("Tb", "terabits", Metric, 1_099_511_627_776.0),
    unit("B", "bytes", Imperial, 1.0),
    unit("KB", "kilobytes", Imperial, 1024.0),
    unit("MB", "megabytes", Imperial, 1_048_576.0),
    unit("GB", "gigabytes", Imperial, 1_073_741_824.0),
    unit("TB", "terabytes", Imperial, 1_099_511_627_776.0),
];

pub(crate) static MEASURES: [Measure; 9] = [
    Measure {
        category: Category::Length,
        units: &LENGTH,
        bridges: Some((Bridge::ratio(3.28084), Bridge::ratio(1.0 / 3.28084))),
    },
    Measure {
        category: Category::Area,
        units: &AREA,
        bridges: Some((Bridge::ratio(10.7639), Bridge::ratio(1.0 / 10.7639))),
    },
    Measure {
        category: Category::Mass,
        units: &MASS,
        bridges: Some((Bridge::ratio(1.0 / 453.592), Bridge::ratio(453.592))),
    },
    Measure {
        category: Category::Volume,
        units: &VOLUME,
        bridges: Some((Bridge::ratio(33.8140226), Bridge::ratio(1.0 / 33.8140226))),
    },
    Measure { category: Category::Time, units: &TIME, bridges: None },
    Measure {
        category: Category::Temperature,
        units: &TEMPERATURE,
        // C -> F and F -> C between the two anchors
        bridges: Some((
            Bridge { scale: 9.0 / 5.0, offset: 32.0 },
            Bridge { scale: 5.0 / 9.0, offset: -32.0 * 5.0 / 9.0 },
        )),
    },
    Measure {
        category: Category::Speed,
        units: &SPEED,
        bridges: Some((Bridge::ratio(1.0 / 1.609344), Bridge::ratio(1.609344))),
    },
    Measure { category: Category::Angle, units: &ANGLE, bridges: None },
    Measure {
        category: Category::Digital,
        units: &DIGITAL,
        bridges: Some((Bridge::ratio(1.0 / 8.0), Bridge::ratio(8.0))),
    },
];

pub(crate) fn measure(category: Category) -> &'static Measure {
    match category {
        Category::Length => &MEASURES[0],
        Category::Area => &MEASURES[1],
        Category::Mass => &MEASURES[2],
        Category::Volume => &MEASURES[3],
        Category::Time => &MEASURES[4],
        Category::Temperature => &MEASURES[5],
        Category::Speed => &MEASURES[6],
        Category::Angle => &MEASURES[7],
        Category::Digital => &MEASURES[8],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_measure_lookup_matches_category() {
        for category in Category::ALL {
            assert_eq!(measure(category).category, category);
        }
    }

    #[test]
    fn test_abbreviations_unique_across_categories() {
        let mut seen = HashSet::new();
        for m in &MEASURES {
            for u in m.units {
                assert!(seen.insert(u.abbr), "duplicate abbreviation {}", u.abbr);
            }
        }
    }

    #[test]
    fn test_single_system_measures_have_no_bridge() {
        for m in &MEASURES {
            let has_secondary = m.units.iter().any(|u| u.system == System::Secondary);
            assert_eq!(has_secondary, m.bridges.is_some(), "{:?}", m.category);
        }
    }

    #[test]
    fn test_temperature_bridges_are_inverse() {
        let (forward, backward) = measure(Category::Temperature).bridges.unwrap();
        assert!((forward.apply(100.0) - 212.0).abs() < 1e-9);
        assert!((backward.apply(212.0) - 100.0).abs() < 1e-9);
    }
}
