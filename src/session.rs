//! One running program's converter and history.

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{Category, UnitCatalog};
use crate::clipboard::{ClipboardProvider, copy_with_provider};
use crate::converter::{Converter, Side};
use crate::history::HistoryStore;
use crate::models::{HistoryEntry, RecordId};
use crate::summary::summary;

/// Save was requested before both sides had a value and a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please completely fill the form before saving.")]
pub struct IncompleteForm;

#[derive(Debug, Clone)]
pub struct Session<C> {
    converter: Converter<C>,
    history: HistoryStore,
}

impl<C: UnitCatalog> Session<C> {
    pub fn new(catalog: C) -> Self {
        Self { converter: Converter::new(catalog), history: HistoryStore::new() }
    }

    pub fn converter(&self) -> &Converter<C> {
        &self.converter
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn select_category(&mut self, category: Category) {
        self.converter.select_category(category);
    }

    pub fn set_value(&mut self, side: Side, raw: &str) {
        self.converter.set_value(side, raw);
    }

    pub fn set_unit(&mut self, side: Side, abbr: &str) {
        self.converter.set_unit(side, abbr);
    }

    pub fn clear_values(&mut self) {
        self.converter.clear_values();
    }

    pub fn swap_sides(&mut self) {
        self.converter.swap_sides();
    }

    /// Push the current conversion onto the history
    pub fn save(&mut self) -> Result<RecordId, IncompleteForm> {
        match self.converter.snapshot() {
            Some(record) => Ok(self.history.save(record)),
            None => {
                debug!("save rejected, form incomplete");
                Err(IncompleteForm)
            }
        }
    }

    pub fn delete(&mut self, id: RecordId) -> Option<HistoryEntry> {
        self.history.delete(id)
    }

    pub fn delete_at(&mut self, index: usize) -> Option<HistoryEntry> {
        self.history.delete_at(index)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Summary line of a saved entry
    pub fn summary(&self, id: RecordId) -> Option<String> {
        self.history.find(id).map(|entry| summary(&entry.record))
    }

    /// Place a saved entry's summary on the clipboard
    pub fn copy_summary(&self, id: RecordId, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
        let text = self.summary(id).with_context(|| format!("No history entry with id {}", id))?;
        copy_with_provider(&text, clipboard).inspect_err(|e| warn!(error = %e, "copy failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StandardCatalog;

    #[derive(Default)]
    struct RecordingClipboard {
        text: Option<String>,
    }

    impl ClipboardProvider for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn filled_session() -> Session<StandardCatalog> {
        let mut session = Session::new(StandardCatalog);
        session.select_category(Category::Length);
        session.set_unit(Side::Left, "m");
        session.set_unit(Side::Right, "ft");
        session.set_value(Side::Left, "1");
        session
    }

    #[test]
    fn test_save_incomplete_form_is_rejected() {
        let mut session = Session::new(StandardCatalog);
        session.select_category(Category::Mass);
        session.set_unit(Side::Right, "kg");

        let err = session.save().unwrap_err();
        assert_eq!(err.to_string(), "Please completely fill the form before saving.");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_save_and_copy_summary() {
        let mut session = filled_session();
        let id = session.save().unwrap();

        let mut clipboard = RecordingClipboard::default();
        session.copy_summary(id, &mut clipboard).unwrap();
        assert_eq!(clipboard.text.as_deref(), Some("1 meters [M] = 3.2808 feet [FT]"));
    }

    #[test]
    fn test_copy_summary_unknown_id() {
        let session = filled_session();
        let mut clipboard = RecordingClipboard::default();

        let err = session.copy_summary(RecordId::new(), &mut clipboard).unwrap_err();
        assert!(err.to_string().contains("No history entry"));
        assert!(clipboard.text.is_none());
    }

    #[test]
    fn test_save_keeps_form_state() {
        let mut session = filled_session();
        session.save().unwrap();
        session.save().unwrap();

        assert_eq!(session.history().len(), 2);
        assert!(session.converter().snapshot().is_some());
    }

    #[test]
    fn test_delete_and_clear_history() {
        let mut session = filled_session();
        let first = session.save().unwrap();
        session.save().unwrap();

        assert!(session.delete(first).is_some());
        assert_eq!(session.history().len(), 1);
        assert!(session.delete_at(3).is_none());

        session.clear_history();
        assert!(session.history().is_empty());
    }
}
