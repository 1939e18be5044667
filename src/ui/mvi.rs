//! Model-View-Intent (MVI) primitives for the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. When a reducer starts a request it bumps the
//! screen's generation; the app notices the bump and issues the fetch.

/// Key presses translated into screen actions, or fetch results coming back
/// from the catalog worker.
pub trait Intent: std::fmt::Debug {}

/// Everything a view needs to render. Replaced wholesale by the reducer.
pub trait UiState: Clone + Default + PartialEq {}

/// The only place where screen state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
