use std::time::Duration;

use crate::present::{CopyCallback, PresentedRow};
use crate::ui::mvi::Reducer;
use crate::ui::results::{ResultRow, ResultsIntent, ResultsReducer, ResultsState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    poll_interval: Duration,
    /// Rows, selection and status line (MVI pattern).
    results: ResultsState,
    /// Copy actions, index-aligned with `results.rows`.
    copy_actions: Vec<CopyCallback>,
}

impl App {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            should_quit: false,
            poll_interval,
            results: ResultsState::default(),
            copy_actions: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    pub fn on_results(&mut self, rows: Vec<PresentedRow>) {
        let (views, actions): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .map(|row| {
                (
                    ResultRow {
                        label: row.label,
                        text: row.text,
                    },
                    row.on_copy,
                )
            })
            .unzip();
        self.copy_actions = actions;
        dispatch_mvi!(self, results, ResultsReducer, ResultsIntent::Replace { rows: views });
    }

    pub fn on_watch_error(&mut self, message: String) {
        dispatch_mvi!(self, results, ResultsReducer, ResultsIntent::Failed { message });
    }

    pub fn select_previous(&mut self) {
        dispatch_mvi!(self, results, ResultsReducer, ResultsIntent::MoveUp);
    }

    pub fn select_next(&mut self) {
        dispatch_mvi!(self, results, ResultsReducer, ResultsIntent::MoveDown);
    }

    /// Invoke the copy action of the selected row.
    pub fn copy_selected(&mut self) {
        let Some(row) = self.results.selected_row() else {
            return;
        };
        let label = row.label.clone();
        if let Some(action) = self.copy_actions.get(self.results.selected) {
            action();
            dispatch_mvi!(self, results, ResultsReducer, ResultsIntent::Copied { label });
        }
    }
}
