//! The conversion form: an injected catalog plus the current state value.

mod state;

pub use state::{ConversionState, Side, SideState, parse_value};

use crate::catalog::{Category, UnitCatalog};
use crate::models::HistoryRecord;

/// Holds one catalog for its whole lifetime and the current
/// [`ConversionState`], replacing the state on every transition
#[derive(Debug, Clone)]
pub struct Converter<C> {
    catalog: C,
    state: ConversionState,
}

impl<C: UnitCatalog> Converter<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog, state: ConversionState::new() }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    fn apply(&mut self, transition: impl FnOnce(ConversionState, &dyn UnitCatalog) -> ConversionState) {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current, &self.catalog);
    }

    pub fn select_category(&mut self, category: Category) {
        self.apply(|s, catalog| s.select_category(category, catalog));
    }

    pub fn set_value(&mut self, side: Side, raw: &str) {
        self.apply(|s, catalog| s.set_value(side, raw, catalog));
    }

    pub fn set_unit(&mut self, side: Side, abbr: &str) {
        self.apply(|s, catalog| s.set_unit(side, abbr, catalog));
    }

    pub fn clear_values(&mut self) {
        self.apply(|s, _| s.clear_values());
    }

    pub fn swap_sides(&mut self) {
        self.apply(|s, _| s.swap_sides());
    }

    pub fn snapshot(&self) -> Option<HistoryRecord> {
        self.state.snapshot()
    }
}
