//! Synchronous publish/subscribe hub.
//!
//! Single-threaded: listeners live in an `Rc<RefCell<..>>` and are invoked in
//! registration order before [`EventBus::publish`] returns. The listener list
//! is copied before delivery, so callbacks may subscribe, unsubscribe or
//! publish again without tripping the `RefCell`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::events::{EventName, EventPayload};

/// Shared callback. Identity is the `Rc` allocation: subscribing the same
/// `Rc` twice to one event delivers once.
pub type Callback = Rc<dyn Fn(&EventPayload)>;

type Listeners = RefCell<HashMap<EventName, Vec<Callback>>>;

fn same_callback(a: &Callback, b: &Callback) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Cloning an `EventBus` yields another handle to the same hub.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Rc<Listeners>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `event`. The returned handle removes it again;
    /// dropping the handle leaves the callback subscribed.
    pub fn subscribe(&self, event: EventName, callback: Callback) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let entry = listeners.entry(event).or_default();
        if !entry.iter().any(|existing| same_callback(existing, &callback)) {
            entry.push(Rc::clone(&callback));
        }
        trace!(event = %event, subscribers = entry.len(), "subscribed");

        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            event,
            callback,
            active: Cell::new(true),
        }
    }

    /// Convenience over [`EventBus::subscribe`] for a fresh closure.
    pub fn on(&self, event: EventName, callback: impl Fn(&EventPayload) + 'static) -> Subscription {
        self.subscribe(event, Rc::new(callback))
    }

    /// Delivers `payload` to every subscriber of `event`. No subscribers is a no-op.
    /// A callback removed by an earlier callback of the same publish is skipped;
    /// one added during the publish waits for the next.
    pub fn publish(&self, event: EventName, payload: &EventPayload) {
        let callbacks: Vec<Callback> = self
            .listeners
            .borrow()
            .get(&event)
            .cloned()
            .unwrap_or_default();
        trace!(event = %event, subscribers = callbacks.len(), "publish");
        for callback in callbacks {
            if self.is_subscribed(event, &callback) {
                callback(payload);
            }
        }
    }

    fn is_subscribed(&self, event: EventName, callback: &Callback) -> bool {
        self.listeners
            .borrow()
            .get(&event)
            .is_some_and(|callbacks| callbacks.iter().any(|existing| same_callback(existing, callback)))
    }

    /// Drops every subscriber of `event`, or of all events when `None`.
    pub fn unsubscribe_all(&self, event: Option<EventName>) {
        let mut listeners = self.listeners.borrow_mut();
        match event {
            Some(event) => {
                listeners.remove(&event);
            }
            None => listeners.clear(),
        }
    }

    pub fn subscriber_count(&self, event: EventName) -> usize {
        self.listeners.borrow().get(&event).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut counts: Vec<(&str, usize)> = listeners
            .iter()
            .map(|(event, callbacks)| (event.as_str(), callbacks.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}

/// Handle returned by [`EventBus::subscribe`].
pub struct Subscription {
    listeners: Weak<Listeners>,
    event: EventName,
    callback: Callback,
    active: Cell<bool>,
}

impl Subscription {
    pub fn event(&self) -> EventName {
        self.event
    }

    /// Removes the callback. Calling it again, or after the bus is gone, does nothing.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let mut listeners = listeners.borrow_mut();
        if let Some(callbacks) = listeners.get_mut(&self.event) {
            callbacks.retain(|existing| !same_callback(existing, &self.callback));
            if callbacks.is_empty() {
                listeners.remove(&self.event);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("active", &self.active.get())
            .finish()
    }
}
