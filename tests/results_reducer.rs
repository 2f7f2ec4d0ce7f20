use clipmorph::ui::mvi::Reducer;
use clipmorph::ui::results::{ResultRow, ResultsIntent, ResultsReducer, ResultsState, StatusLine};

fn make_rows(labels: &[&str]) -> Vec<ResultRow> {
    labels
        .iter()
        .map(|label| ResultRow {
            label: label.to_string(),
            text: format!("{label} text"),
        })
        .collect()
}

fn loaded(labels: &[&str]) -> ResultsState {
    ResultsReducer::reduce(
        ResultsState::default(),
        ResultsIntent::Replace {
            rows: make_rows(labels),
        },
    )
}

#[test]
fn replace_loads_rows_and_selects_first() {
    let state = loaded(&["Raw value", "Typeset"]);
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.selected, 0);
    assert_eq!(state.changes, 1);
}

#[test]
fn replace_keeps_selection_on_same_label() {
    let state = loaded(&["Raw value", "Symbolic", "Typeset"]);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveDown);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveDown);
    assert_eq!(state.selected_row().unwrap().label, "Typeset");

    let state = ResultsReducer::reduce(
        state,
        ResultsIntent::Replace {
            rows: make_rows(&["Raw value", "Typeset"]),
        },
    );
    assert_eq!(state.selected, 1);
}

#[test]
fn replace_falls_back_to_first_row() {
    let state = loaded(&["Raw value", "Geometry"]);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveDown);
    let state = ResultsReducer::reduce(
        state,
        ResultsIntent::Replace {
            rows: make_rows(&["Raw value"]),
        },
    );
    assert_eq!(state.selected, 0);
}

#[test]
fn move_up_wraps_to_last() {
    let state = loaded(&["a", "b", "c"]);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveUp);
    assert_eq!(state.selected, 2);
}

#[test]
fn move_down_wraps_to_first() {
    let state = loaded(&["a", "b"]);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveDown);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveDown);
    assert_eq!(state.selected, 0);
}

#[test]
fn moves_on_empty_state_stay_at_zero() {
    let state = ResultsReducer::reduce(ResultsState::default(), ResultsIntent::MoveUp);
    assert_eq!(state.selected, 0);
    let state = ResultsReducer::reduce(state, ResultsIntent::MoveDown);
    assert_eq!(state.selected, 0);
    assert!(state.selected_row().is_none());
}

#[test]
fn copied_sets_status_and_survives_replace() {
    let state = loaded(&["Raw value"]);
    let state = ResultsReducer::reduce(
        state,
        ResultsIntent::Copied {
            label: "Raw value".to_string(),
        },
    );
    assert_eq!(
        state.status,
        Some(StatusLine::Copied("Raw value".to_string()))
    );
    let state = ResultsReducer::reduce(
        state,
        ResultsIntent::Replace {
            rows: make_rows(&["Raw value"]),
        },
    );
    assert!(matches!(state.status, Some(StatusLine::Copied(_))));
}

#[test]
fn failure_is_reported_as_error_status() {
    let state = ResultsReducer::reduce(
        ResultsState::default(),
        ResultsIntent::Failed {
            message: "Shared buffer unavailable: no display".to_string(),
        },
    );
    assert!(matches!(state.status, Some(StatusLine::Error(ref m)) if m.contains("no display")));
}
