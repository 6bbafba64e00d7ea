//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::process::Command;

use convertr::{Category, Session, Side, StandardCatalog};

/// Command for the built binary
pub fn convertr_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_convertr"))
}

/// Session with both units chosen and a value typed on the left
pub fn filled_session(category: Category, from: &str, to: &str, value: &str) -> Session<StandardCatalog> {
    let mut session = Session::new(StandardCatalog::new());
    session.select_category(category);
    session.set_unit(Side::Left, from);
    session.set_unit(Side::Right, to);
    session.set_value(Side::Left, value);
    session
}

/// Relative comparison for converted values
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!((actual - expected).abs() < tolerance, "expected {expected}, got {actual}");
}
