//! Shared test utilities.

#![allow(dead_code)]

use clipmorph::present::{PresentedRow, Presenter};
use parking_lot::Mutex;
use std::sync::Arc;

pub type Batches = Arc<Mutex<Vec<Vec<PresentedRow>>>>;

/// Presenter that keeps every batch it receives.
#[derive(Default)]
pub struct RecordingPresenter {
    batches: Batches,
}

impl RecordingPresenter {
    pub fn batches(&self) -> Batches {
        Arc::clone(&self.batches)
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, rows: Vec<PresentedRow>) {
        self.batches.lock().push(rows);
    }
}

/// `(label, text)` pairs of a batch, for compact assertions.
pub fn pairs(rows: &[PresentedRow]) -> Vec<(String, String)> {
    rows.iter()
        .map(|row| (row.label.clone(), row.text.clone()))
        .collect()
}
