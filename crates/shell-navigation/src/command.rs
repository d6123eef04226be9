//! Commands with guarded availability.
//!
//! A [`Command`] bundles an action, a guard predicate and a "can-execute changed"
//! notification channel. Availability is never polled: whoever owns the state the guard
//! reads calls [`Command::raise_can_execute_changed`] when that state may have changed,
//! and bound UI affordances re-query [`Command::can_execute`] in response.

use std::fmt;

use tracing::trace;

use crate::error::{NavigationError, Result};
use crate::event::Event;

type Action<P> = Box<dyn Fn(&P) -> Result<()>>;
type Guard<P> = Box<dyn Fn(&P) -> bool>;

/// Action + guard + change notification.
///
/// `P` is the parameter type: `()` for parameterless commands, `str` for commands that
/// take a destination name.
pub struct Command<P: ?Sized> {
    name: &'static str,
    action: Action<P>,
    guard: Guard<P>,
    can_execute_changed: Event<()>,
}

impl<P: ?Sized> fmt::Debug for Command<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("can_execute_changed", &self.can_execute_changed)
            .finish_non_exhaustive()
    }
}

impl<P: ?Sized> Command<P> {
    /// Create a command whose availability is decided by `guard`.
    pub fn new<A, G>(name: &'static str, action: A, guard: G) -> Self
    where
        A: Fn(&P) -> Result<()> + 'static,
        G: Fn(&P) -> bool + 'static,
    {
        Self {
            name,
            action: Box::new(action),
            guard: Box::new(guard),
            can_execute_changed: Event::new(),
        }
    }

    /// Create a command that is always available.
    pub fn always<A>(name: &'static str, action: A) -> Self
    where
        A: Fn(&P) -> Result<()> + 'static,
    {
        Self::new(name, action, |_| true)
    }

    /// Evaluate the guard for `param`.
    pub fn can_execute(&self, param: &P) -> bool {
        (self.guard)(param)
    }

    /// Run the action if the guard allows it.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::CommandUnavailable`] without touching the action when
    /// the guard is false, otherwise whatever the action returns.
    pub fn execute(&self, param: &P) -> Result<()> {
        if !self.can_execute(param) {
            trace!(command = self.name, "command unavailable");
            return Err(NavigationError::CommandUnavailable { command: self.name });
        }
        trace!(command = self.name, "executing command");
        (self.action)(param)
    }

    /// Channel raised whenever availability should be re-evaluated.
    pub fn can_execute_changed(&self) -> &Event<()> {
        &self.can_execute_changed
    }

    /// Notify observers that availability may have changed.
    pub fn raise_can_execute_changed(&self) {
        trace!(command = self.name, "can-execute changed");
        self.can_execute_changed.raise(&());
    }
}
