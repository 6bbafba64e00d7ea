use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a saved conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub left_value: f64,
    pub left_unit_abbr: String,
    pub left_unit_full: String,
    pub right_value: f64,
    pub right_unit_abbr: String,
    pub right_unit_full: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: RecordId,
    pub saved_at: DateTime<Utc>,
    pub record: HistoryRecord,
}

impl HistoryEntry {
    pub fn new(record: HistoryRecord) -> Self {
        Self { id: RecordId::new(), saved_at: Utc::now(), record }
    }
}
