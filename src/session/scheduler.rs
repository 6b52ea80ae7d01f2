//! Delayed scripted moves.
//!
//! A scheduled move carries the generation of the game it was scheduled
//! for. Starting a new game bumps the generation instead of reaching into
//! the queue, so a move left over from an old game still fires but is
//! recognised as stale and dropped before it touches anything.

use std::time::Duration;

/// Identifies one game within a session.
pub type Generation = u64;

/// A pending scripted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledMove {
    pub generation: Generation,
    pub due: Duration,
}

/// Pending moves ordered by due time.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledMove>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a move. Moves due at the same time fire in scheduling order.
    pub fn schedule(&mut self, generation: Generation, due: Duration) {
        let at = self.pending.partition_point(|m| m.due <= due);
        self.pending.insert(at, ScheduledMove { generation, due });
    }

    /// Whether a move for `generation` is waiting.
    #[must_use]
    pub fn is_pending_for(&self, generation: Generation) -> bool {
        self.pending.iter().any(|m| m.generation == generation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the earliest move due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledMove> {
        match self.pending.first() {
            Some(next) if next.due <= now => Some(self.pending.remove(0)),
            _ => None,
        }
    }
}
