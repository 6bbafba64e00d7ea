//! convertr - convert values between units of measurement
//!
//! This library provides the pieces behind the `convertr` binary:
//!
//! - A catalog of measurement categories and their units, with conversion
//! - A two-sided conversion form that keeps both values consistent
//! - An in-memory history of saved conversions
//! - Human-readable summaries suitable for the clipboard
//!
//! # Example
//!
//! ```
//! use convertr::{Category, Session, Side, StandardCatalog};
//!
//! let mut session = Session::new(StandardCatalog::new());
//! session.select_category(Category::Length);
//! session.set_unit(Side::Left, "m");
//! session.set_unit(Side::Right, "ft");
//! session.set_value(Side::Left, "1");
//!
//! let id = session.save()?;
//! assert_eq!(session.summary(id).as_deref(), Some("1 meters [M] = 3.2808 feet [FT]"));
//! # Ok::<(), convertr::IncompleteForm>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod converter;
pub mod history;
pub mod logging;
pub mod models;
pub mod session;
pub mod summary;
pub mod tui;

// Re-export commonly used types
pub use catalog::{CatalogError, Category, StandardCatalog, UnitCatalog};
pub use clipboard::{ClipboardProvider, copy_to_clipboard};
pub use converter::{ConversionState, Converter, Side};
pub use history::HistoryStore;
pub use models::{HistoryEntry, HistoryRecord, RecordId, UnitDescriptor};
pub use session::{IncompleteForm, Session};
pub use summary::{format_value, summary};
