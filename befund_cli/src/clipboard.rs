//! System clipboard output.
//!
//! The clipboard may be missing entirely (SSH sessions, headless machines);
//! callers treat failures as non-fatal.
//!
//! On Linux the copying process owns the X11/Wayland selection, so the text
//! disappears when it exits. Unless a clipboard manager takes the selection
//! over first, `befund` keeps serving it for up to [`LINUX_HOLD`] before
//! exiting.

use befund_core::{Error, Result};
use std::time::Duration;

/// How long the selection is served after copying on Linux
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub const LINUX_HOLD: Duration = Duration::from_secs(30);

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;

    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    set_text(&mut clipboard, text).map_err(|e| Error::Clipboard(e.to_string()))?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    // Returns early once another owner (e.g. a clipboard manager) takes over
    let deadline = std::time::Instant::now() + LINUX_HOLD;
    clipboard.set().wait_until(deadline).text(text.to_owned())
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_clipboard_is_reported_as_error() {
        // Headless CI has no clipboard; either outcome must be a clean Result
        match copy_to_clipboard("Pathologisch: -\nNormal: -") {
            Ok(()) => {}
            Err(Error::Clipboard(message)) => assert!(!message.is_empty()),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_linux_hold_is_bounded() {
        assert!(LINUX_HOLD > Duration::ZERO);
        assert!(LINUX_HOLD <= Duration::from_secs(60));
    }
}
