//! Request/loading/error container used by every dashboard panel.
//!
//! # Invariants
//! - `Loading` and `Error` states never expose data.
//! - `Error` always carries a message; other states never do.

use serde::Serialize;

/// Lifecycle of one panel data slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Data slot with its load status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsyncState<T> {
    data: Option<T>,
    status: LoadState,
    error: Option<String>,
    #[serde(skip)]
    initial: Option<T>,
}

impl<T: Clone> AsyncState<T> {
    /// Starts idle, exposing `initial` until the first load.
    pub fn new(initial: Option<T>) -> Self {
        Self {
            data: initial.clone(),
            status: LoadState::Idle,
            error: None,
            initial,
        }
    }

    pub fn set_loading(&mut self) {
        self.data = None;
        self.status = LoadState::Loading;
        self.error = None;
    }

    pub fn set_success(&mut self, data: T) {
        self.data = Some(data);
        self.status = LoadState::Success;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.data = None;
        self.status = LoadState::Error;
        self.error = Some(message.into());
    }

    /// Returns to idle with the initial data.
    pub fn reset(&mut self) {
        self.data = self.initial.clone();
        self.status = LoadState::Idle;
        self.error = None;
    }
}

impl<T> AsyncState<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> LoadState {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadState::Loading
    }
}

impl<T: Clone + Default> Default for AsyncState<T> {
    fn default() -> Self {
        Self::new(Some(T::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::{AsyncState, LoadState};

    #[test]
    fn loading_clears_data_and_error() {
        let mut state = AsyncState::new(Some(vec![1]));
        assert_eq!(state.status(), LoadState::Idle);
        assert_eq!(state.data(), Some(&vec![1]));

        state.set_error("boom");
        assert_eq!(state.error(), Some("boom"));
        assert!(state.data().is_none());

        state.set_loading();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn reset_restores_initial_data() {
        let mut state = AsyncState::new(Some(0u32));
        state.set_success(42);
        assert_eq!(state.data(), Some(&42));
        state.reset();
        assert_eq!(state.data(), Some(&0));
        assert_eq!(state.status(), LoadState::Idle);
    }
}
