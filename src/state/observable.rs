//! Observable values
//!
//! A value with change subscribers. Views subscribe once and re-render when
//! notified, so nothing has to be re-attached after a state change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Handle returned by [`Observable::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Single-threaded observable cell
pub struct Observable<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<u64>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Read the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.notify();
    }

    /// Mutate in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot first: a callback may subscribe or read the value.
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: PartialEq> Observable<T> {
    /// Set only when the value differs. Returns whether subscribers ran.
    pub fn set_if_changed(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_notified_on_update() {
        let obs = Observable::new(1);
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        obs.subscribe(move || h.set(h.get() + 1));

        obs.set(2);
        obs.update(|v| *v += 1);

        assert_eq!(obs.get(), 3);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_set_if_changed_skips_equal_values() {
        let obs = Observable::new("login".to_string());
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        obs.subscribe(move || h.set(h.get() + 1));

        assert!(!obs.set_if_changed("login".to_string()));
        assert!(obs.set_if_changed("logout".to_string()));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let obs = Observable::new(0);
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        let id = obs.subscribe(move || h.set(h.get() + 1));
        obs.set(1);
        obs.unsubscribe(id);
        obs.set(2);

        assert_eq!(hits.get(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_can_read_value() {
        let obs = Rc::new(Observable::new(0));
        let seen = Rc::new(Cell::new(0));

        let o = Rc::clone(&obs);
        let s = Rc::clone(&seen);
        obs.subscribe(move || s.set(o.get()));
        obs.set(7);

        assert_eq!(seen.get(), 7);
    }
}
