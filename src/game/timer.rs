//! Keyed delayed tasks
//!
//! Nothing runs on its own: the owner calls [`Scheduler::take_due`] with the current instant
//! and handles whatever has expired. Scheduling under a key that is already pending replaces
//! the earlier task.

use std::time::Instant;

#[derive(Debug, Clone)]
struct Pending<K, T> {
    key: K,
    due: Instant,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<K, T> {
    pending: Vec<Pending<K, T>>,
}

impl<K, T> Default for Scheduler<K, T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq, T> Scheduler<K, T> {
    pub fn schedule(&mut self, key: K, due: Instant, task: T) {
        self.cancel(&key);
        self.pending.push(Pending { key, due, task });
    }

    /// Drop the task under `key`; returns whether one was pending
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != *key);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.iter().any(|p| p.key == *key)
    }

    /// Earliest deadline among pending tasks
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every task due at or before `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| p.due);
        due.into_iter().map(|p| p.task).collect()
    }
}
