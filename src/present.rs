//! Output boundary: the rows handed to whatever displays results.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::config::OutputFormat;

/// Invoked when the operator asks to copy a row back to the shared buffer.
pub type CopyCallback = Arc<dyn Fn() + Send + Sync>;

/// One rendered notation ready for display.
#[derive(Clone)]
pub struct PresentedRow {
    pub label: String,
    pub text: String,
    pub on_copy: CopyCallback,
}

impl PresentedRow {
    /// Request that `text` be written back to the shared buffer.
    pub fn copy(&self) {
        (self.on_copy)();
    }
}

impl fmt::Debug for PresentedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentedRow")
            .field("label", &self.label)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Displays a batch of rows. Fire-and-forget.
pub trait Presenter {
    fn present(&mut self, rows: Vec<PresentedRow>);
}

#[derive(Serialize)]
struct RowRecord<'a> {
    label: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct Batch<'a> {
    rows: Vec<RowRecord<'a>>,
}

/// Writes each batch to a byte stream (stdout in headless mode).
pub struct StreamPresenter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> StreamPresenter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_batch(&mut self, rows: &[PresentedRow]) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for row in rows {
                    writeln!(self.writer, "{}: {}", row.label, row.text)?;
                }
                writeln!(self.writer)?;
            }
            OutputFormat::Json => {
                let batch = Batch {
                    rows: rows
                        .iter()
                        .map(|row| RowRecord {
                            label: &row.label,
                            text: &row.text,
                        })
                        .collect(),
                };
                serde_json::to_writer(&mut self.writer, &batch)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()
    }
}

impl<W: Write> Presenter for StreamPresenter<W> {
    fn present(&mut self, rows: Vec<PresentedRow>) {
        if let Err(err) = self.write_batch(&rows) {
            tracing::warn!(error = %err, "Failed to write results");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn row(label: &str, text: &str) -> PresentedRow {
        PresentedRow {
            label: label.to_string(),
            text: text.to_string(),
            on_copy: Arc::new(|| {}),
        }
    }

    #[test]
    fn text_format_lists_rows_then_blank_line() {
        let mut presenter = StreamPresenter::new(Vec::new(), OutputFormat::Text);
        presenter.present(vec![row("Raw value", "dvec2(1, 2)"), row("Typeset", "x")]);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "Raw value: dvec2(1, 2)\nTypeset: x\n\n");
    }

    #[test]
    fn json_format_is_one_line_per_batch() {
        let mut presenter = StreamPresenter::new(Vec::new(), OutputFormat::Json);
        presenter.present(vec![row("Raw value", "hello")]);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["rows"][0]["label"], "Raw value");
        assert_eq!(value["rows"][0]["text"], "hello");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn copy_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let row = PresentedRow {
            label: "Raw value".to_string(),
            text: "hello".to_string(),
            on_copy: Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        };
        row.copy();
        row.copy();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
