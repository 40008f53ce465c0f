//! Copy-URL action for the dedicated QR view
//!
//! The acknowledgment is conditional on the write actually succeeding; a
//! clipboard denied by the platform surfaces as [`Error::Clipboard`].

use crate::error::Result;

#[cfg(feature = "clipboard")]
use crate::error::Error;

/// Destination for the copy-URL action. The system clipboard in
/// production, a recording sink in tests.
pub trait ClipboardSink {
    /// Place `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Copy the portfolio URL to `sink` and log the acknowledgment.
pub fn copy_portfolio_url(sink: &mut dyn ClipboardSink, url: &str) -> Result<()> {
    sink.set_text(url)?;
    tracing::info!(url, "Portfolio URL copied to clipboard");
    Ok(())
}

/// The host system clipboard.
#[cfg(feature = "clipboard")]
#[cfg_attr(docsrs, doc(cfg(feature = "clipboard")))]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Connect to the system clipboard.
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingSink {
        contents: Option<String>,
        deny: bool,
    }

    impl ClipboardSink for RecordingSink {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.deny {
                return Err(Error::Clipboard("denied by platform".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copies_the_literal_url() {
        let mut sink = RecordingSink::default();
        copy_portfolio_url(&mut sink, "https://aadilhannan.bloocube.com").unwrap();
        assert_eq!(
            sink.contents.as_deref(),
            Some("https://aadilhannan.bloocube.com")
        );
    }

    #[test]
    fn denied_clipboard_is_an_error_not_an_acknowledgment() {
        let mut sink = RecordingSink {
            deny: true,
            ..RecordingSink::default()
        };
        let result = copy_portfolio_url(&mut sink, "https://aadilhannan.bloocube.com");
        assert!(matches!(result, Err(Error::Clipboard(_))));
        assert!(sink.contents.is_none());
    }
}
