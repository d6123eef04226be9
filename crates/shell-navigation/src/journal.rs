//! Navigation journal: per-region back/forward history.
//!
//! [`NavigationJournal`] is the contract screens and the shell coordinator read from.
//! [`Journal`] is the in-memory implementation owned by
//! [`RegionNavigationService`](crate::service::RegionNavigationService).
//!
//! The journal keeps a back stack, the current entry and a forward stack:
//!
//! - A new navigation pushes the current entry (if any) onto the back stack and clears
//!   the forward stack.
//! - A screen that opts out of history (`persist_in_history() == false`) never becomes
//!   the current entry, so it is skipped when going back or forward.
//! - Going back or forward replays the target entry through the owning service and does
//!   not record new history.

use std::cell::RefCell;
use std::rc::Weak;

use tracing::debug;

use crate::context::NavigationMode;
use crate::error::{JournalDirection, NavigationError, Result};
use crate::service::RegionNavigationService;

/// One recorded visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Destination name the entry navigates to.
    pub destination: String,
}

impl JournalEntry {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

/// Back/forward history of a navigation service.
pub trait NavigationJournal {
    /// Whether there is an entry behind the current one.
    fn can_go_back(&self) -> bool;

    /// Whether there is an entry ahead of the current one.
    fn can_go_forward(&self) -> bool;

    /// Navigate to the previous entry.
    fn go_back(&self) -> Result<()>;

    /// Navigate to the next entry.
    fn go_forward(&self) -> Result<()>;

    /// The entry currently shown, if it was recorded.
    fn current_entry(&self) -> Option<JournalEntry>;

    /// Forget all history.
    fn clear(&self);

    /// Copy of the history for display.
    ///
    /// Journals that only track their position report the current entry alone.
    fn snapshot(&self) -> JournalSnapshot {
        JournalSnapshot {
            current: self.current_entry(),
            ..JournalSnapshot::default()
        }
    }
}

/// Point-in-time copy of a journal, for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalSnapshot {
    /// Oldest first.
    pub back: Vec<JournalEntry>,
    pub current: Option<JournalEntry>,
    /// Next entry first.
    pub forward: Vec<JournalEntry>,
}

#[derive(Debug, Default)]
struct JournalState {
    back: Vec<JournalEntry>,
    current: Option<JournalEntry>,
    forward: Vec<JournalEntry>,
}

/// In-memory journal bound to one [`RegionNavigationService`].
#[derive(Debug)]
pub struct Journal {
    state: RefCell<JournalState>,
    target: Weak<RegionNavigationService>,
}

impl Journal {
    pub(crate) fn new(target: Weak<RegionNavigationService>) -> Self {
        Self {
            state: RefCell::new(JournalState::default()),
            target,
        }
    }

    /// Copy of the current stacks.
    pub fn snapshot(&self) -> JournalSnapshot {
        let state = self.state.borrow();
        JournalSnapshot {
            back: state.back.clone(),
            current: state.current.clone(),
            forward: state.forward.iter().rev().cloned().collect(),
        }
    }

    /// Record a new navigation.
    pub(crate) fn record(&self, entry: JournalEntry, persist_in_history: bool) {
        let mut state = self.state.borrow_mut();
        if let Some(current) = state.current.take() {
            state.back.push(current);
        }
        state.forward.clear();
        if persist_in_history {
            state.current = Some(entry);
        } else {
            debug!(destination = %entry.destination, "entry not persisted in history");
        }
    }

    /// Commit a completed back navigation.
    pub(crate) fn commit_back(&self) {
        let mut state = self.state.borrow_mut();
        let Some(entry) = state.back.pop() else {
            return;
        };
        if let Some(current) = state.current.take() {
            state.forward.push(current);
        }
        state.current = Some(entry);
    }

    /// Commit a completed forward navigation.
    pub(crate) fn commit_forward(&self) {
        let mut state = self.state.borrow_mut();
        let Some(entry) = state.forward.pop() else {
            return;
        };
        if let Some(current) = state.current.take() {
            state.back.push(current);
        }
        state.current = Some(entry);
    }

    fn replay(&self, direction: JournalDirection) -> Result<()> {
        let entry = {
            let state = self.state.borrow();
            match direction {
                JournalDirection::Back => state.back.last().cloned(),
                JournalDirection::Forward => state.forward.last().cloned(),
            }
        };
        let entry = entry.ok_or(NavigationError::JournalExhausted { direction })?;
        let service = self
            .target
            .upgrade()
            .ok_or(NavigationError::ServiceUnavailable)?;
        let mode = match direction {
            JournalDirection::Back => NavigationMode::Back,
            JournalDirection::Forward => NavigationMode::Forward,
        };
        service.navigate_with_mode(&entry.destination, mode)
    }
}

impl NavigationJournal for Journal {
    fn can_go_back(&self) -> bool {
        !self.state.borrow().back.is_empty()
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().forward.is_empty()
    }

    fn go_back(&self) -> Result<()> {
        self.replay(JournalDirection::Back)
    }

    fn go_forward(&self) -> Result<()> {
        self.replay(JournalDirection::Forward)
    }

    fn current_entry(&self) -> Option<JournalEntry> {
        self.state.borrow().current.clone()
    }

    fn clear(&self) {
        *self.state.borrow_mut() = JournalState::default();
    }

    fn snapshot(&self) -> JournalSnapshot {
        Journal::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detached_journal() -> Journal {
        Journal::new(Weak::new())
    }

    #[test]
    fn test_new_journal_has_no_history() {
        let journal = detached_journal();
        assert!(!journal.can_go_back());
        assert!(!journal.can_go_forward());
        assert!(journal.current_entry().is_none());
    }

    #[test]
    fn test_record_pushes_previous_entry() {
        let journal = detached_journal();
        journal.record(JournalEntry::new("A"), true);
        journal.record(JournalEntry::new("B"), true);

        assert!(journal.can_go_back());
        assert_eq!(journal.current_entry(), Some(JournalEntry::new("B")));
        assert_eq!(journal.snapshot().back, vec![JournalEntry::new("A")]);
    }

    #[test]
    fn test_commit_back_and_forward_move_current() {
        let journal = detached_journal();
        journal.record(JournalEntry::new("A"), true);
        journal.record(JournalEntry::new("B"), true);
        journal.record(JournalEntry::new("C"), true);

        journal.commit_back();
        journal.commit_back();
        assert_eq!(journal.current_entry(), Some(JournalEntry::new("A")));
        assert!(!journal.can_go_back());
        assert_eq!(
            journal.snapshot().forward,
            vec![JournalEntry::new("B"), JournalEntry::new("C")]
        );

        journal.commit_forward();
        assert_eq!(journal.current_entry(), Some(JournalEntry::new("B")));
        assert!(journal.can_go_back());
        assert!(journal.can_go_forward());
    }

    #[test]
    fn test_record_clears_forward_stack() {
        let journal = detached_journal();
        journal.record(JournalEntry::new("A"), true);
        journal.record(JournalEntry::new("B"), true);
        journal.commit_back();
        assert!(journal.can_go_forward());

        journal.record(JournalEntry::new("C"), true);
        assert!(!journal.can_go_forward());
        assert_eq!(journal.snapshot().back, vec![JournalEntry::new("A")]);
    }

    #[test]
    fn test_unpersisted_entry_is_skipped() {
        let journal = detached_journal();
        journal.record(JournalEntry::new("A"), true);
        journal.record(JournalEntry::new("Splash"), false);
        assert!(journal.current_entry().is_none());

        journal.record(JournalEntry::new("B"), true);
        assert_eq!(journal.snapshot().back, vec![JournalEntry::new("A")]);
    }

    #[test]
    fn test_replay_without_service_fails() {
        let journal = detached_journal();
        assert_eq!(
            journal.go_back(),
            Err(NavigationError::JournalExhausted {
                direction: JournalDirection::Back
            })
        );

        journal.record(JournalEntry::new("A"), true);
        journal.record(JournalEntry::new("B"), true);
        assert_eq!(journal.go_back(), Err(NavigationError::ServiceUnavailable));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let journal = detached_journal();
        journal.record(JournalEntry::new("A"), true);
        journal.record(JournalEntry::new("B"), true);
        journal.clear();
        assert_eq!(journal.snapshot(), JournalSnapshot::default());
    }
}
