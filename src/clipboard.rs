//! Write-only clipboard access for the translated text.

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened at startup.
    #[error("no system clipboard")]
    Unavailable,
    #[error("clipboard error: {0}")]
    Backend(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard. On X11 and Wayland the copied text is only served while
/// this handle lives, so one is opened at startup and kept for the session.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn open() -> Result<Self, ClipboardError> {
        Ok(Self { inner: arboard::Clipboard::new()? })
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text.to_owned())?;
        Ok(())
    }
}

/// A clipboard that failed to open reports every write as unavailable.
impl<C: ClipboardSink> ClipboardSink for Option<C> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self {
            Some(cb) => cb.write_text(text),
            None => Err(ClipboardError::Unavailable),
        }
    }
}

/// Captures writes in memory.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Backend("selection owner refused".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
