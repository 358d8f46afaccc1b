//! Pending command buffer between input capture and the next tick.
//!
//! Commands are drained newest-first: the buffer behaves as a stack, so a
//! burst of keys within one tick is applied in reverse arrival order.

use arrayvec::ArrayVec;

use crate::types::{Command, DEFAULT_MAX_PENDING, MAX_PENDING_COMMANDS};

#[derive(Debug, Clone)]
pub struct CommandQueue {
    pending: ArrayVec<Command, MAX_PENDING_COMMANDS>,
    limit: usize,
}

impl CommandQueue {
    /// `limit` is clamped to `1..=MAX_PENDING_COMMANDS`.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            pending: ArrayVec::new(),
            limit: limit.clamp(1, MAX_PENDING_COMMANDS),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Append a command. Returns `false` (and drops it) when full.
    pub fn push(&mut self, command: Command) -> bool {
        if self.pending.len() >= self.limit {
            return false;
        }
        self.pending.push(command);
        true
    }

    /// Take the most recently pushed command.
    pub fn pop(&mut self) -> Option<Command> {
        self.pending.pop()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Pending commands in arrival order.
    pub fn as_slice(&self) -> &[Command] {
        &self.pending
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_PENDING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_newest_first() {
        let mut q = CommandQueue::default();
        q.push(Command::Left);
        q.push(Command::Right);
        q.push(Command::Up);
        assert_eq!(q.as_slice(), &[Command::Left, Command::Right, Command::Up]);
        assert_eq!(q.pop(), Some(Command::Up));
        assert_eq!(q.pop(), Some(Command::Right));
        assert_eq!(q.pop(), Some(Command::Left));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn rejects_when_full() {
        let mut q = CommandQueue::with_limit(2);
        assert!(q.push(Command::Down));
        assert!(q.push(Command::Down));
        assert!(!q.push(Command::Up));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some(Command::Down));
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(CommandQueue::with_limit(0).limit(), 1);
        assert_eq!(
            CommandQueue::with_limit(10_000).limit(),
            MAX_PENDING_COMMANDS
        );
    }
}
