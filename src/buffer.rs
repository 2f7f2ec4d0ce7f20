//! Shared text buffer access: the system clipboard, or an in-memory stand-in.

use std::sync::Arc;

use arboard::Clipboard;
use parking_lot::Mutex;
use thiserror::Error;

/// Failures reading or writing the shared buffer. All of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("Shared buffer unavailable: {0}")]
    Unavailable(String),

    #[error("Shared buffer holds non-text content")]
    NotText,

    #[error("Shared buffer is empty")]
    Empty,
}

impl From<arboard::Error> for BufferError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ContentNotAvailable => BufferError::Empty,
            arboard::Error::ConversionFailure => BufferError::NotText,
            other => BufferError::Unavailable(other.to_string()),
        }
    }
}

/// A readable and writable string buffer owned by someone else.
pub trait SharedBuffer {
    fn read(&mut self) -> Result<String, BufferError>;

    fn write(&mut self, text: &str) -> Result<(), BufferError>;
}

/// A buffer whose handle is opened on first use and reopened after it
/// becomes unavailable. A failed open is reported as
/// [`BufferError::Unavailable`] and retried on the next access.
pub struct Reconnecting<B, F> {
    handle: Option<B>,
    open: F,
}

impl<B, F> Reconnecting<B, F>
where
    B: SharedBuffer,
    F: FnMut() -> Result<B, BufferError>,
{
    pub fn with_opener(open: F) -> Self {
        Self { handle: None, open }
    }

    fn handle(&mut self) -> Result<&mut B, BufferError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                let handle = (self.open)()?;
                tracing::info!("Shared buffer opened");
                handle
            }
        };
        Ok(self.handle.insert(handle))
    }

    /// Drop the handle after an `Unavailable` failure so the next access reopens it.
    fn settle<T>(&mut self, result: Result<T, BufferError>) -> Result<T, BufferError> {
        if let Err(BufferError::Unavailable(reason)) = &result {
            tracing::debug!(reason = %reason, "Dropping shared buffer handle");
            self.handle = None;
        }
        result
    }
}

impl<B, F> SharedBuffer for Reconnecting<B, F>
where
    B: SharedBuffer,
    F: FnMut() -> Result<B, BufferError>,
{
    fn read(&mut self) -> Result<String, BufferError> {
        let result = self.handle().and_then(|handle| handle.read());
        self.settle(result)
    }

    fn write(&mut self, text: &str) -> Result<(), BufferError> {
        let result = self.handle().and_then(|handle| handle.write(text));
        self.settle(result)
    }
}

/// An open `arboard` clipboard handle.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    pub fn open() -> Result<Self, BufferError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl SharedBuffer for ArboardClipboard {
    fn read(&mut self) -> Result<String, BufferError> {
        Ok(self.clipboard.get_text()?)
    }

    fn write(&mut self, text: &str) -> Result<(), BufferError> {
        self.clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// The operating system clipboard, opened lazily.
pub type SystemClipboard =
    Reconnecting<ArboardClipboard, fn() -> Result<ArboardClipboard, BufferError>>;

impl SystemClipboard {
    /// Does not touch the clipboard; the handle is opened on the first access.
    pub fn new() -> Self {
        Self::with_opener(ArboardClipboard::open)
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct MemoryContent {
    text: Option<String>,
    failure: Option<BufferError>,
    reads: usize,
}

/// In-process buffer. Clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<MemoryContent>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.lock().text = Some(text.into());
    }

    /// Make every subsequent read fail with `err` until [`MemoryBuffer::recover`].
    pub fn fail_with(&self, err: BufferError) {
        self.inner.lock().failure = Some(err);
    }

    pub fn recover(&self) {
        self.inner.lock().failure = None;
    }

    pub fn text(&self) -> Option<String> {
        self.inner.lock().text.clone()
    }

    /// Number of read attempts so far, failed ones included.
    pub fn reads(&self) -> usize {
        self.inner.lock().reads
    }
}

impl SharedBuffer for MemoryBuffer {
    fn read(&mut self) -> Result<String, BufferError> {
        let mut content = self.inner.lock();
        content.reads += 1;
        if let Some(err) = &content.failure {
            return Err(err.clone());
        }
        content.text.clone().ok_or(BufferError::Empty)
    }

    fn write(&mut self, text: &str) -> Result<(), BufferError> {
        self.inner.lock().text = Some(text.to_string());
        Ok(())
    }
}
