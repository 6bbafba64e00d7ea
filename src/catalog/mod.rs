//! Unit enumeration and numeric conversion.
//!
//! The rest of the crate only talks to the [`UnitCatalog`] trait; the
//! built-in [`StandardCatalog`] is what the binary injects.

mod category;
mod standard;
mod tables;

pub use category::{Category, ParseCategoryError};
pub use standard::StandardCatalog;
use thiserror::Error;

use crate::models::UnitDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("cannot convert between '{from}' ({from_category}) and '{to}' ({to_category})")]
    IncompatibleUnits { from: String, from_category: Category, to: String, to_category: Category },
}

/// Source of unit lists and conversions
pub trait UnitCatalog {
    /// Ordered units for a category; never empty, abbreviations unique
    fn list_units(&self, category: Category) -> Vec<UnitDescriptor>;

    /// Convert `value` from one unit to another of the same category
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, CatalogError>;
}

impl<T: UnitCatalog + ?Sized> UnitCatalog for &T {
    fn list_units(&self, category: Category) -> Vec<UnitDescriptor> {
        (**self).list_units(category)
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, CatalogError> {
        (**self).convert(value, from, to)
    }
}
