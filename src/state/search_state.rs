// ============================================================================
// SEARCH STATE - Results area content + search sequence
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::ReactiveState;
use crate::viewmodels::ResultsView;

/// State owned by one route finder widget
#[derive(Clone)]
pub struct SearchState {
    view: ReactiveState<ResultsView>,
    last_search_seq: Rc<RefCell<u64>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            view: ReactiveState::new(ResultsView::Idle),
            last_search_seq: Rc::new(RefCell::new(0)),
        }
    }

    pub fn view(&self) -> ResultsView {
        self.view.get()
    }

    /// Replaces whatever the results area shows
    pub fn set_view(&self, view: ResultsView) {
        self.view.set(view);
    }

    /// Called on every state change (used to re-render the results area)
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.view.subscribe(callback);
    }

    /// Registers a new submission and returns its sequence number
    pub fn begin_search(&self) -> u64 {
        let mut seq = self.last_search_seq.borrow_mut();
        *seq += 1;
        *seq
    }

    /// True when a newer search was submitted after `seq`
    pub fn is_stale(&self, seq: u64) -> bool {
        *self.last_search_seq.borrow() != seq
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(SearchState::new().view(), ResultsView::Idle);
    }

    #[test]
    fn older_search_becomes_stale_once_a_newer_one_starts() {
        let state = SearchState::new();
        let first = state.begin_search();
        assert!(!state.is_stale(first));
        let second = state.begin_search();
        assert!(state.is_stale(first));
        assert!(!state.is_stale(second));
    }
}
