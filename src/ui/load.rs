//! Fetch lifecycle shared by every screen.
//!
//! ```text
//! Idle ──→ Loading ──→ Loaded | Failed
//!             ↑               │
//!             └───────────────┘  (any parameter change)
//! ```
//!
//! Each request is tagged with a generation. A response whose generation
//! is no longer current belongs to a superseded request and is dropped.

/// Monotonic request tag for one state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// User-facing message.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Accept a response only if it answers the current request.
pub fn is_current(current: Generation, response: Generation) -> bool {
    if current != response {
        tracing::debug!(
            current = current.value(),
            response = response.value(),
            "Dropping stale response"
        );
        return false;
    }
    true
}
