use crate::catalog::Creature;
use crate::ui::mvi::UiState;

/// The four mutually exclusive panels, as one type.
///
/// A loading/error/result flag triple would admit invalid combinations
/// (error and result visible at once); a sum type makes them
/// unrepresentable. Entering `Loading` destroys any previous payload, so
/// stale data can never sit behind a fresh spinner.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchViewState {
    /// Nothing has been searched yet, or the input was cleared.
    #[default]
    Welcome,
    /// A lookup for `term` is in flight.
    Loading { term: String },
    /// The last lookup failed; `message` is already user-facing.
    Error { message: String },
    /// The last lookup succeeded.
    Result { creature: Creature },
}

impl UiState for SearchViewState {}

impl SearchViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// True once at least one non-empty lookup has been attempted.
    pub fn has_searched(&self) -> bool {
        !matches!(self, Self::Welcome)
    }
}
