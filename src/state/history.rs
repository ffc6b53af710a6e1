//! Generic undo/redo history engine
//!
//! Holds a present value between a bounded past stack and an unbounded
//! future stack. Undo and redo arm a single-shot suppression flag so that
//! replaying an existing state is never recorded as a new action. The flag
//! is an instance field; independent histories never share suppression
//! state.

use crate::io::configuration::DEFAULT_MAX_HISTORY;
use std::collections::VecDeque;
use std::mem;

/// Bounded undo/redo stack around a present value
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: VecDeque<T>,
    max_entries: usize,
    suppress_next: bool,
}

impl<T> History<T> {
    /// Create a history with the default retention limit
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_MAX_HISTORY)
    }

    /// Create a history retaining at most `max_entries` past states
    pub const fn with_limit(initial: T, max_entries: usize) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
            max_entries,
            suppress_next: false,
        }
    }

    /// The current committed value
    pub const fn present(&self) -> &T {
        &self.present
    }

    /// Record a new present value
    ///
    /// The old present moves onto the past stack (evicting the oldest entry
    /// beyond the retention limit) and any redo branch is discarded. The
    /// first commit after an undo or redo consumes the suppression flag and
    /// is swallowed when it replays the present value; a direct commit of a
    /// different value records normally even while the flag is armed.
    pub fn commit(&mut self, value: T)
    where
        T: PartialEq,
    {
        if self.suppress_next {
            self.suppress_next = false;
            if value == self.present {
                return;
            }
        }
        self.past.push(mem::replace(&mut self.present, value));
        if self.past.len() > self.max_entries {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back to the previous state, arming commit suppression
    ///
    /// Returns whether a step was taken; no-op when the past is empty.
    pub fn undo(&mut self) -> bool {
        if let Some(previous) = self.past.pop() {
            let replaced = mem::replace(&mut self.present, previous);
            self.future.push_front(replaced);
            self.suppress_next = true;
            true
        } else {
            false
        }
    }

    /// Step forward to the next state, arming commit suppression
    ///
    /// Returns whether a step was taken; no-op when the future is empty.
    pub fn redo(&mut self) -> bool {
        if let Some(next) = self.future.pop_front() {
            let replaced = mem::replace(&mut self.present, next);
            self.past.push(replaced);
            self.suppress_next = true;
            true
        } else {
            false
        }
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of retained past states
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of retained future states
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Drop both stacks, keeping the present value
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.suppress_next = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_undo_redo_walk() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);

        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(*history.present(), 0);
        assert!(!history.can_undo());
        assert!(history.can_redo());

        assert!(history.redo());
        assert!(history.redo());
        assert_eq!(*history.present(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_suppression_is_single_shot() {
        let mut history = History::new(0);
        history.commit(1);
        history.undo();

        // The replay commit is swallowed
        history.commit(0);
        assert_eq!(*history.present(), 0);
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 1);

        // The next direct commit records and discards the redo branch
        history.commit(2);
        assert_eq!(*history.present(), 2);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_direct_commit_after_undo_is_recorded() {
        let mut history = History::new(0);
        history.commit(1);
        history.undo();

        // A commit of a new value right after undo is a user action, not a
        // replay, and must branch: present becomes 2 and the redo stack drops
        history.commit(2);
        assert_eq!(*history.present(), 2);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
        assert!(history.undo());
        assert_eq!(*history.present(), 0);
    }

    #[test]
    fn test_retention_limit_evicts_oldest() {
        let mut history = History::with_limit(0, 5);
        for value in 1..=10 {
            history.commit(value);
        }
        assert_eq!(history.undo_depth(), 5);
        // Walk all the way back: the oldest surviving state is 5
        while history.undo() {}
        assert_eq!(*history.present(), 5);
    }
}
