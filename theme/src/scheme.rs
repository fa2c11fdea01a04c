// OS color-scheme signal: a boolean "prefers dark" read plus change
// notifications. The store only ever consumes the trait; `SchemeHub` is the
// single-threaded reference implementation that hosts feed from whatever
// delivers the platform signal (the gui pipes `matchMedia` events into it).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SchemeListener = Rc<dyn Fn(bool)>;

/// Read and watch the platform light/dark preference.
pub trait SchemeSignal {
    /// Current "prefers dark" state.
    fn prefers_dark(&self) -> bool;

    /// Registers a change listener. Delivery continues until the returned
    /// handle is unsubscribed; there is no automatic teardown.
    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription;
}

/// Teardown handle for a scheme subscription. Dropping it without calling
/// [`SchemeSubscription::unsubscribe`] leaves the listener registered.
pub struct SchemeSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SchemeSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to tear down.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Removes the listener. Safe to call once; the handle is consumed.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

struct HubState {
    prefers_dark: Cell<bool>,
    listeners: RefCell<Vec<(u64, SchemeListener)>>,
    next_id: Cell<u64>,
}

/// Shared scheme signal fed by the host. Clones observe the same state.
#[derive(Clone)]
pub struct SchemeHub {
    state: Rc<HubState>,
}

impl SchemeHub {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Rc::new(HubState {
                prefers_dark: Cell::new(prefers_dark),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Updates the cached state without notifying listeners. Used to seed
    /// the initial value before anyone is watching.
    pub fn set(&self, prefers_dark: bool) {
        self.state.prefers_dark.set(prefers_dark);
    }

    /// Updates the cached state and notifies every registered listener.
    pub fn emit(&self, prefers_dark: bool) {
        self.state.prefers_dark.set(prefers_dark);
        // Snapshot so a listener may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<SchemeListener> = self
            .state
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(prefers_dark);
        }
    }
}

impl Default for SchemeHub {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SchemeSignal for SchemeHub {
    fn prefers_dark(&self) -> bool {
        self.state.prefers_dark.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state.listeners.borrow_mut().push((id, listener));

        let state = Rc::downgrade(&self.state);
        SchemeSubscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_notifies_and_updates_state() {
        let hub = SchemeHub::new(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = hub.subscribe(Rc::new(move |dark| sink.borrow_mut().push(dark)));

        hub.emit(true);
        hub.emit(false);
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!hub.prefers_dark());
    }

    #[test]
    fn set_seeds_without_notifying() {
        let hub = SchemeHub::new(false);
        let count = Rc::new(Cell::new(0u32));
        let sink = count.clone();
        let _sub = hub.subscribe(Rc::new(move |_| sink.set(sink.get() + 1)));

        hub.set(true);
        assert!(hub.prefers_dark());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribe_stops_delivery_for_that_listener_only() {
        let hub = SchemeHub::new(false);
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));

        let sink = first.clone();
        let sub = hub.subscribe(Rc::new(move |_| sink.set(sink.get() + 1)));
        let sink = second.clone();
        let _kept = hub.subscribe(Rc::new(move |_| sink.set(sink.get() + 1)));

        hub.emit(true);
        sub.unsubscribe();
        hub.emit(false);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn dropping_the_handle_keeps_the_listener() {
        let hub = SchemeHub::new(false);
        let count = Rc::new(Cell::new(0u32));
        let sink = count.clone();
        drop(hub.subscribe(Rc::new(move |_| sink.set(sink.get() + 1))));

        hub.emit(true);
        assert_eq!(count.get(), 1);
    }
}
