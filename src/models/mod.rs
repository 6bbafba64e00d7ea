//! Data models shared by the converter, the history store and the UI.
//!
//! - [`UnitDescriptor`] - a unit offered for a category
//! - [`HistoryRecord`] - an immutable snapshot of one completed conversion
//! - [`HistoryEntry`] - a saved record with its stable id and save time
//! - [`RecordId`] - identifier assigned to a record when it is saved

pub mod record;
pub mod unit;

pub use record::{HistoryEntry, HistoryRecord, RecordId};
pub use unit::UnitDescriptor;
