//! Unidirectional data flow primitives for the UI layer.
//!
//! Intents (user actions and system events) are folded over the current
//! state by a pure reducer; the view is a function of the resulting state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for view state objects.
///
/// A state carries everything its view needs and is replaced on each
/// transition, never mutated in place.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: keystrokes, timer expiries, lookup completions.
pub trait Intent: Send + 'static {}

/// Folds intents into states.
///
/// The reducer is the only place where state transitions happen, and it
/// must stay pure: side effects live in the app, not here.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
