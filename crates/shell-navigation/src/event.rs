//! Single-threaded multicast notifications.
//!
//! [`Event`] is the observer channel used for "navigated" notifications and for
//! command "can-execute changed" notifications. Subscribing returns a
//! [`SubscriptionId`]; the subscriber is responsible for unsubscribing with it.
//! Nothing is released implicitly.
//!
//! Dispatch works on a snapshot of the subscriber list, so handlers may subscribe or
//! unsubscribe while an event is being raised. A handler removed during dispatch is not
//! invoked for the remainder of that dispatch; a handler added during dispatch first
//! sees the next raise.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle identifying one subscription on one [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<T> = Rc<dyn Fn(&T)>;

/// Multicast notification with explicit subscription handles.
pub struct Event<T: ?Sized> {
    handlers: RefCell<Vec<(SubscriptionId, Handler<T>)>>,
    next_id: Cell<u64>,
}

impl<T: ?Sized> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T: ?Sized> Event<T> {
    /// Create an event with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Register a handler and return its subscription handle.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if the handle was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Whether the handle is currently subscribed.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.handlers
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Invoke every subscribed handler once, in subscription order.
    pub fn raise(&self, args: &T) {
        let snapshot: Vec<(SubscriptionId, Handler<T>)> = self
            .handlers
            .borrow()
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        for (id, handler) in snapshot {
            if self.is_subscribed(id) {
                handler(args);
            }
        }
    }
}
