//! Change detection against the shared buffer.
//!
//! Each tick reads the buffer, compares it with the last snapshot and, on a
//! change, runs the whole registry and hands the rows to the presenter.
//! Copy-back requests arrive over a channel so the buffer is only ever
//! touched from the loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::buffer::{BufferError, SharedBuffer};
use crate::present::{PresentedRow, Presenter};
use crate::shutdown::ShutdownHandle;
use crate::transform::Registry;

/// Last snapshot seen by the loop. `None` until the first successful read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopState {
    last_seen: Option<String>,
}

impl LoopState {
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Record `current` and report whether it differs from the previous value.
    fn observe(&mut self, current: &str) -> bool {
        if self.last_seen.as_deref() == Some(current) {
            return false;
        }
        self.last_seen = Some(current.to_string());
        true
    }
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The buffer could not be read; state untouched.
    Skipped(BufferError),
    /// Same content as last time.
    Unchanged,
    /// New content; `rows` transformers produced output.
    Changed { rows: usize },
}

pub struct WatchLoop<B, P> {
    state: LoopState,
    registry: Arc<Registry>,
    buffer: B,
    presenter: P,
    copy_tx: mpsc::UnboundedSender<String>,
    copy_rx: mpsc::UnboundedReceiver<String>,
}

impl<B: SharedBuffer, P: Presenter> WatchLoop<B, P> {
    pub fn new(registry: Arc<Registry>, buffer: B, presenter: P) -> Self {
        let (copy_tx, copy_rx) = mpsc::unbounded_channel();
        Self {
            state: LoopState::default(),
            registry,
            buffer,
            presenter,
            copy_tx,
            copy_rx,
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Poll the buffer once.
    pub fn tick(&mut self) -> TickOutcome {
        let current = match self.buffer.read() {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(error = %err, "Buffer read failed, retrying next tick");
                return TickOutcome::Skipped(err);
            }
        };

        // State is updated before transforming so a failing pass is not
        // repeated on the next tick.
        if !self.state.observe(&current) {
            return TickOutcome::Unchanged;
        }

        let rows: Vec<PresentedRow> = self
            .registry
            .run(&current)
            .into_iter()
            .map(|output| {
                let tx = self.copy_tx.clone();
                let text = output.text.clone();
                PresentedRow {
                    label: output.label,
                    text: output.text,
                    on_copy: Arc::new(move || {
                        if tx.send(text.clone()).is_err() {
                            tracing::trace!("Copy request dropped (watch loop gone)");
                        }
                    }),
                }
            })
            .collect();
        let count = rows.len();
        tracing::debug!(
            bytes = current.len(),
            rows = count,
            "Buffer changed, presenting results"
        );
        self.presenter.present(rows);
        TickOutcome::Changed { rows: count }
    }

    /// Write `text` to the shared buffer on behalf of a copy request.
    pub fn write_back(&mut self, text: &str) {
        match self.buffer.write(text) {
            Ok(()) => tracing::debug!(bytes = text.len(), "Copied result to buffer"),
            Err(err) => tracing::warn!(error = %err, "Failed to copy result to buffer"),
        }
    }

    /// Drain pending copy requests without waiting.
    pub fn process_copy_requests(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(text) = self.copy_rx.try_recv() {
            self.write_back(&text);
            handled += 1;
        }
        handled
    }

    /// Tick every `interval` until `shutdown` fires. Ticks never overlap and
    /// late ticks are delayed rather than bunched.
    pub async fn run(mut self, interval: Duration, shutdown: ShutdownHandle) -> Self {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_ms = interval.as_millis() as u64, "Watching buffer");

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                Some(text) = self.copy_rx.recv() => self.write_back(&text),
                _ = ticker.tick() => {
                    if shutdown.is_shutting_down() {
                        break;
                    }
                    self.tick();
                }
            }
        }

        tracing::info!("Watch loop stopped");
        self
    }
}
