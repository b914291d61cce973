// ============================================================================
// REACTIVITY - Value + subscribers notified on every change
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Shared value with change notifications.
///
/// Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Update in place and notify subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Callbacks may read the value or subscribe again, so no borrow is held
    // while they run.
    fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }
        let other = state.clone();
        other.set(5);
        other.update(|v| *v += 1);

        assert_eq!(state.get(), 6);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn subscriber_can_read_value_during_notify() {
        let state = ReactiveState::new(String::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let observed = state.clone();
            state.subscribe(move || seen.borrow_mut().push(observed.get()));
        }
        state.set("a".to_string());
        state.set("b".to_string());
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }
}
