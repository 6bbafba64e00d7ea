use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum clipboard size (10MB); summaries are far below this
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Anything that can receive copied text (system clipboard, test doubles)
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard, opened on first use
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().context("Failed to initialize clipboard")?);
        }
        self.clipboard.as_mut().context("Failed to initialize clipboard")
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Validates clipboard text without accessing the clipboard
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

/// Validate `text` and hand it to `provider`
pub fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    Ok(())
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - Text is empty
/// - Text is too large for clipboard (>10MB)
/// - Clipboard access is denied or unavailable (headless environment)
///
/// # Platform Support
/// - macOS: pasteboard API
/// - Linux: X11 or Wayland
/// - Windows: Win32 clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate first, before initializing clipboard (for better error messages in CI)
    validate_clipboard_text(text)?;

    let mut clipboard = SystemClipboard::new();
    clipboard.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock clipboard for testing without system clipboard access
    struct MockClipboard {
        text: Option<String>,
        should_fail: bool,
    }

    impl MockClipboard {
        fn new() -> Self {
            Self { text: None, should_fail: false }
        }

        fn with_failure() -> Self {
            Self { text: None, should_fail: true }
        }

        fn get_text(&self) -> Option<&str> {
            self.text.as_deref()
        }
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                anyhow::bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_summary_with_mock() {
        let mut mock = MockClipboard::new();
        let text = "1 meters [M] = 3.2808 feet [FT]";

        assert!(copy_with_provider(text, &mut mock).is_ok());
        assert_eq!(mock.get_text(), Some(text));
    }

    #[test]
    fn test_copy_overwrites_previous_text() {
        let mut mock = MockClipboard::new();
        copy_with_provider("100 degrees Celsius [C] = 212 degrees Fahrenheit [F]", &mut mock)
            .unwrap();
        copy_with_provider("1 kilobytes [KB] = 8 kilobits [KB]", &mut mock).unwrap();

        assert_eq!(mock.get_text(), Some("1 kilobytes [KB] = 8 kilobits [KB]"));
    }

    #[test]
    fn test_clipboard_provider_failure() {
        let mut mock = MockClipboard::with_failure();

        let result = copy_with_provider("This should fail", &mut mock);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Mock clipboard error"));
    }

    #[test]
    fn test_copy_empty_text() {
        let mut mock = MockClipboard::new();
        let result = copy_with_provider("", &mut mock);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
        assert!(mock.get_text().is_none());
    }

    #[test]
    fn test_copy_one_byte_over_limit() {
        let mut mock = MockClipboard::new();
        let text_over_limit = "a".repeat(MAX_CLIPBOARD_SIZE + 1);
        let result = copy_with_provider(&text_over_limit, &mut mock);

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("too large"));
        assert!(err_msg.contains("bytes"));
    }

    #[test]
    fn test_copy_exactly_at_limit() {
        let mut mock = MockClipboard::new();
        let text_at_limit = "a".repeat(MAX_CLIPBOARD_SIZE);

        assert!(copy_with_provider(&text_at_limit, &mut mock).is_ok());
        assert_eq!(mock.get_text().map(|s| s.len()), Some(MAX_CLIPBOARD_SIZE));
    }

    #[test]
    fn test_copy_to_clipboard_validates_before_clipboard_access() {
        // Validation errors come back before arboard is touched
        let result = copy_to_clipboard("");
        assert!(result.unwrap_err().to_string().contains("empty"));
    }
}
