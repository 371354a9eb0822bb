//! Share affordance
//!
//! Offers the project link through the platform's share action when one
//! exists, and falls back to copying the canonical URL.

use base64::{engine::general_purpose, Engine as _};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, warn};

pub const SHARE_TITLE: &str =
    "𝑥morphic | Modern skeuomorphic, glassmorphic, and neumorphic CSS generator";
pub const SHARE_URL: &str = "https://xmorphic.dev";
pub const SHARE_TEXT: &str = concat!(
    "𝑥morphic generates skeuomorphic, glassmorphic, and neumorphic CSS ",
    "containing easily-configurable variables"
);

pub const COPIED_NOTICE: &str = "Copied link to clipboard!";
pub const FAILED_NOTICE: &str = "Could not share :(";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("native sharing is not available")]
    Unsupported,

    #[error("no clipboard available")]
    NoClipboard,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Title, link and description handed to a share action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: &'static str,
    pub url: &'static str,
    pub text: &'static str,
}

impl SharePayload {
    pub const fn canonical() -> Self {
        Self {
            title: SHARE_TITLE,
            url: SHARE_URL,
            text: SHARE_TEXT,
        }
    }
}

/// Host capabilities used by [`share`]
pub trait Platform {
    /// Whether a native share action exists
    fn can_share(&self) -> bool;

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;

    fn copy_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Result of a share attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
}

impl ShareOutcome {
    /// Message shown to the user; a native share reports its own result
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Shared => None,
            Self::Copied => Some(COPIED_NOTICE),
            Self::Failed => Some(FAILED_NOTICE),
        }
    }
}

/// Share the canonical payload, or copy the link when sharing is unavailable
pub fn share<P: Platform + ?Sized>(platform: &mut P) -> ShareOutcome {
    let payload = SharePayload::canonical();
    if platform.can_share() {
        return match platform.share(&payload) {
            Ok(()) => ShareOutcome::Shared,
            Err(err) => {
                warn!(error = %err, "share failed");
                ShareOutcome::Failed
            }
        };
    }

    match platform.copy_text(payload.url) {
        Ok(()) => {
            debug!(url = payload.url, "link copied");
            ShareOutcome::Copied
        }
        Err(err) => {
            warn!(error = %err, "copy failed");
            ShareOutcome::Failed
        }
    }
}

/// Terminal host: no share sheet, clipboard through the OSC 52 escape
pub struct TerminalPlatform<W: Write> {
    out: W,
    clipboard: bool,
}

impl<W: Write> TerminalPlatform<W> {
    /// `clipboard` should be true only when `out` is an interactive terminal
    pub fn new(out: W, clipboard: bool) -> Self {
        Self { out, clipboard }
    }
}

impl TerminalPlatform<io::Stdout> {
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        let out = io::stdout();
        let clipboard = out.is_terminal();
        Self::new(out, clipboard)
    }
}

impl<W: Write> Platform for TerminalPlatform<W> {
    fn can_share(&self) -> bool {
        false
    }

    fn share(&mut self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }

    fn copy_text(&mut self, text: &str) -> Result<(), ShareError> {
        if !self.clipboard {
            return Err(ShareError::NoClipboard);
        }
        let encoded = general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{encoded}\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePlatform {
        native: bool,
        fail: bool,
        shared: Vec<SharePayload>,
        copied: Vec<String>,
    }

    impl Platform for FakePlatform {
        fn can_share(&self) -> bool {
            self.native
        }

        fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Unsupported);
            }
            self.shared.push(*payload);
            Ok(())
        }

        fn copy_text(&mut self, text: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::NoClipboard);
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_native_share_sends_payload() {
        let mut platform = FakePlatform {
            native: true,
            ..Default::default()
        };
        assert_eq!(share(&mut platform), ShareOutcome::Shared);
        assert_eq!(platform.shared, vec![SharePayload::canonical()]);
        assert!(platform.copied.is_empty());
        assert_eq!(ShareOutcome::Shared.notice(), None);
    }

    #[test]
    fn test_fallback_copies_url() {
        let mut platform = FakePlatform::default();
        let outcome = share(&mut platform);
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(platform.copied, vec!["https://xmorphic.dev".to_string()]);
        assert_eq!(outcome.notice(), Some("Copied link to clipboard!"));
    }

    #[test]
    fn test_copy_failure_notice() {
        let mut platform = FakePlatform {
            fail: true,
            ..Default::default()
        };
        let outcome = share(&mut platform);
        assert_eq!(outcome, ShareOutcome::Failed);
        assert_eq!(outcome.notice(), Some("Could not share :("));
    }

    #[test]
    fn test_terminal_copy_writes_osc52() {
        let mut platform = TerminalPlatform::new(Vec::new(), true);
        assert_eq!(share(&mut platform), ShareOutcome::Copied);
        assert_eq!(
            String::from_utf8(platform.out).unwrap(),
            "\x1b]52;c;aHR0cHM6Ly94bW9ycGhpYy5kZXY=\x07"
        );
    }

    #[test]
    fn test_terminal_without_clipboard_fails() {
        let mut platform = TerminalPlatform::new(Vec::new(), false);
        assert_eq!(share(&mut platform), ShareOutcome::Failed);
        assert!(platform.out.is_empty());
    }
}
