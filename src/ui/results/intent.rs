use crate::ui::results::state::ResultRow;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResultsIntent {
    /// A new buffer value was transformed.
    Replace { rows: Vec<ResultRow> },
    MoveUp,
    MoveDown,
    /// The selected row was handed to the buffer.
    Copied { label: String },
    /// The buffer could not be opened or written.
    Failed { message: String },
}

impl Intent for ResultsIntent {}
