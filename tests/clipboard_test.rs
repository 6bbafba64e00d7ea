mod common;

use arboard::Clipboard;
use common::filled_session;
use convertr::clipboard::SystemClipboard;
use convertr::{Category, copy_to_clipboard};

/// Tests that actually access clipboard are disabled in automated testing
/// Set ENABLE_CLIPBOARD_TESTS=1 to run these tests locally.
fn should_test_clipboard() -> bool {
    std::env::var("ENABLE_CLIPBOARD_TESTS").is_ok()
}

/// Headless machines have no clipboard; only that error is acceptable
fn assert_clipboard_unavailable(e: &anyhow::Error) {
    let err_msg = e.to_string().to_lowercase();
    assert!(err_msg.contains("clipboard") || err_msg.contains("display"), "Unexpected error type: {}", e);
}

fn read_clipboard() -> Option<String> {
    Clipboard::new().ok()?.get_text().ok()
}

#[test]
fn test_clipboard_copy_summary() {
    if !should_test_clipboard() {
        eprintln!("Skipping clipboard access test (set ENABLE_CLIPBOARD_TESTS=1 to run)");
        return;
    }

    let mut session = filled_session(Category::Length, "m", "ft", "1");
    let id = session.save().unwrap();
    let mut clipboard = SystemClipboard::new();

    match session.copy_summary(id, &mut clipboard) {
        Ok(()) => {
            if let Some(contents) = read_clipboard() {
                assert_eq!(contents, "1 meters [M] = 3.2808 feet [FT]");
            }
        }
        Err(e) => assert_clipboard_unavailable(&e),
    }
}

#[test]
fn test_clipboard_overwrite() {
    if !should_test_clipboard() {
        eprintln!("Skipping clipboard access test (set ENABLE_CLIPBOARD_TESTS=1 to run)");
        return;
    }

    let first = copy_to_clipboard("100 grams [G] = 0.1 kilograms [KG]");
    let second = copy_to_clipboard("0 degrees Celsius [C] = 32 degrees Fahrenheit [F]");

    match (first, second) {
        (Ok(()), Ok(())) => {
            if let Some(contents) = read_clipboard() {
                assert_eq!(contents, "0 degrees Celsius [C] = 32 degrees Fahrenheit [F]");
            }
        }
        (Err(e), _) | (_, Err(e)) => assert_clipboard_unavailable(&e),
    }
}

#[test]
fn test_clipboard_rejects_empty_text() {
    // Validation happens before the system clipboard is touched
    assert!(copy_to_clipboard("").is_err());
}
