use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Label of the row last copied to the buffer.
    Copied(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsState {
    pub rows: Vec<ResultRow>,
    pub selected: usize,
    /// One-line feedback shown in the footer.
    pub status: Option<StatusLine>,
    /// Number of changes seen so far.
    pub changes: u64,
}

impl UiState for ResultsState {}

impl ResultsState {
    pub fn selected_row(&self) -> Option<&ResultRow> {
        self.rows.get(self.selected)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
