use crate::error::AppError;

pub trait Clipboard {
    fn is_available(&self) -> bool;
    fn write(&mut self, text: &str) -> Result<(), AppError>;
    fn read(&mut self) -> Result<String, AppError>;
}

/// System clipboard through arboard. Stays unavailable if no clipboard could
/// be connected on startup, e.g. on a headless session.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(error) => {
                tracing::warn!("clipboard not available: {:?}", error);
                None
            }
        };

        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn write(&mut self, text: &str) -> Result<(), AppError> {
        let clipboard = self.inner.as_mut().ok_or(AppError::ClipboardUnavailable)?;
        clipboard.set_text(text)?;

        Ok(())
    }

    fn read(&mut self) -> Result<String, AppError> {
        let clipboard = self.inner.as_mut().ok_or(AppError::ClipboardUnavailable)?;
        Ok(clipboard.get_text()?)
    }
}
