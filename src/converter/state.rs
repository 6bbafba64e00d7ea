//! Immutable form state and its transitions.
//!
//! Every transition consumes a [`ConversionState`] and returns the next one.
//! The paired-value invariant holds after every transition: when both units
//! are set and one side has a value, the other side is the catalog's
//! conversion of it; when either unit is unset, both values are `None`.

use tracing::{debug, warn};

use crate::catalog::{Category, UnitCatalog};
use crate::models::{HistoryRecord, UnitDescriptor};

/// One of the two halves of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Value and unit of one side; `None` means "not entered yet"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideState {
    pub value: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionState {
    category: Option<Category>,
    available_units: Vec<UnitDescriptor>,
    left: SideState,
    right: SideState,
}

/// Parse free-text input; blank or non-numeric text is "no value"
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn available_units(&self) -> &[UnitDescriptor] {
        &self.available_units
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn left(&self) -> &SideState {
        &self.left
    }

    pub fn right(&self) -> &SideState {
        &self.right
    }

    /// Display name of a unit in the current category
    pub fn unit_name(&self, abbr: &str) -> Option<&str> {
        self.available_units
            .iter()
            .find(|u| u.abbreviation == abbr)
            .map(|u| u.display_name.as_str())
    }

    /// Switch category: load its units and reset both sides
    pub fn select_category(self, category: Category, catalog: &dyn UnitCatalog) -> Self {
        let available_units = catalog.list_units(category);
        debug!(%category, units = available_units.len(), "category selected");
        Self {
            category: Some(category),
            available_units,
            left: SideState::default(),
            right: SideState::default(),
        }
    }

    /// Edit the value on one side and recompute the other
    pub fn set_value(mut self, side: Side, raw: &str, catalog: &dyn UnitCatalog) -> Self {
        let value = parse_value(raw);
        let units = (self.side(side).unit.clone(), self.side(side.opposite()).unit.clone());

        let (Some(value), (Some(this_unit), Some(other_unit))) = (value, units) else {
            return self.clear_values();
        };

        match catalog.convert(value, &this_unit, &other_unit) {
            Ok(converted) => {
                self.side_mut(side).value = Some(value);
                self.side_mut(side.opposite()).value = Some(converted);
                self
            }
            Err(e) => {
                warn!(error = %e, "conversion failed, blanking values");
                self.clear_values()
            }
        }
    }

    /// Change the unit on one side. The opposite side is the source of truth:
    /// if it holds a value and a unit, this side is recomputed from it.
    pub fn set_unit(mut self, side: Side, abbr: &str, catalog: &dyn UnitCatalog) -> Self {
        if self.unit_name(abbr).is_none() {
            warn!(unit = abbr, category = ?self.category, "unit not offered for category, ignoring");
            return self;
        }

        self.side_mut(side).unit = Some(abbr.to_string());

        let source = self.side(side.opposite()).clone();
        let (Some(source_value), Some(source_unit)) = (source.value, source.unit) else {
            return self;
        };

        match catalog.convert(source_value, &source_unit, abbr) {
            Ok(converted) => {
                self.side_mut(side).value = Some(converted);
                self
            }
            Err(e) => {
                warn!(error = %e, "conversion failed, blanking values");
                self.clear_values()
            }
        }
    }

    /// Blank both values, keep category and units
    pub fn clear_values(mut self) -> Self {
        self.left.value = None;
        self.right.value = None;
        self
    }

    /// Exchange the two sides
    pub fn swap_sides(mut self) -> Self {
        std::mem::swap(&mut self.left, &mut self.right);
        self
    }

    /// A history record when the form is complete, `None` otherwise
    pub fn snapshot(&self) -> Option<HistoryRecord> {
        let left_value = self.left.value?;
        let right_value = self.right.value?;
        let left_unit = self.left.unit.as_deref()?;
        let right_unit = self.right.unit.as_deref()?;

        Some(HistoryRecord {
            left_value,
            left_unit_abbr: left_unit.to_string(),
            left_unit_full: self.unit_name(left_unit)?.to_string(),
            right_value,
            right_unit_abbr: right_unit.to_string(),
            right_unit_full: self.unit_name(right_unit)?.to_string(),
        })
    }
}
