use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition. The only place state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
