use crate::ui::mvi::Reducer;
use crate::ui::results::intent::ResultsIntent;
use crate::ui::results::state::{ResultsState, StatusLine};

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsState;
    type Intent = ResultsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultsIntent::Replace { rows } => {
                // Keep the cursor on the same notation when it is still offered.
                let selected = state
                    .selected_row()
                    .and_then(|current| rows.iter().position(|row| row.label == current.label))
                    .unwrap_or(0);
                ResultsState {
                    rows,
                    selected,
                    status: state.status,
                    changes: state.changes + 1,
                }
            }
            ResultsIntent::MoveUp => {
                let selected = if state.selected == 0 {
                    state.rows.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
                ResultsState { selected, ..state }
            }
            ResultsIntent::MoveDown => {
                let selected = if state.selected + 1 >= state.rows.len() {
                    0
                } else {
                    state.selected + 1
                };
                ResultsState { selected, ..state }
            }
            ResultsIntent::Copied { label } => ResultsState {
                status: Some(StatusLine::Copied(label)),
                ..state
            },
            ResultsIntent::Failed { message } => ResultsState {
                status: Some(StatusLine::Error(message)),
                ..state
            },
        }
    }
}
