use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchViewState;

/// State machine for the search panel.
///
/// Every transition is absolute: starting a lookup discards whatever was
/// on screen, and both completion intents leave `Loading` unconditionally,
/// so the spinner is cleared exactly once per attempt. Stale completions
/// never reach this reducer; the app drops lookup events whose generation
/// is not the current one before dispatching.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchViewState;
    type Intent = SearchIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Cleared => SearchViewState::Welcome,
            SearchIntent::LookupStarted { term } => SearchViewState::Loading { term },
            SearchIntent::LookupSucceeded { creature } => SearchViewState::Result { creature },
            SearchIntent::LookupFailed { message } => SearchViewState::Error { message },
        }
    }
}
