//! Generation-keyed delayed tasks
//!
//! Scheduling a task never removes the one it replaces. The old entry stays
//! queued and is dropped as stale when its deadline comes up, because its
//! generation no longer matches the live generation for that kind. This is
//! the cancel-on-supersede behaviour the pad relies on: a digit press that
//! clears the error display bumps the generation, and the error-clear timer
//! scheduled earlier fires into nothing.

use std::time::Instant;

/// Monotonically increasing token identifying one scheduling of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Scheduled<K> {
    kind: K,
    generation: Generation,
    due: Instant,
}

/// A small set of delayed tasks keyed by kind
#[derive(Debug)]
pub struct DelayedTasks<K> {
    /// Everything scheduled and not yet popped, stale entries included
    queue: Vec<Scheduled<K>>,
    /// Live generation per kind
    live: Vec<(K, Generation)>,
    next_generation: u64,
}

impl<K: Copy + Eq> DelayedTasks<K> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            live: Vec::new(),
            next_generation: 0,
        }
    }

    /// Schedule `kind` at `due`, superseding any pending task of the same kind
    pub fn schedule(&mut self, kind: K, due: Instant) -> Generation {
        self.next_generation += 1;
        let generation = Generation(self.next_generation);

        self.live.retain(|(k, _)| *k != kind);
        self.live.push((kind, generation));
        self.queue.push(Scheduled {
            kind,
            generation,
            due,
        });

        generation
    }

    /// Invalidate the pending task of `kind`; returns whether one was live
    pub fn supersede(&mut self, kind: K) -> bool {
        let before = self.live.len();
        self.live.retain(|(k, _)| *k != kind);
        before != self.live.len()
    }

    /// Drop every task, live or stale
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.live.clear();
    }

    /// Earliest deadline among live tasks
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue
            .iter()
            .filter(|s| self.is_live(s))
            .map(|s| s.due)
            .min()
    }

    /// Pop the earliest task due at or before `now`
    ///
    /// Stale entries encountered on the way are discarded. Returns the kind
    /// and the instant it was due, so callers can chain follow-up deadlines
    /// off the logical firing time rather than the polling time.
    pub fn pop_due(&mut self, now: Instant) -> Option<(K, Instant)> {
        loop {
            let index = self
                .queue
                .iter()
                .enumerate()
                .filter(|(_, s)| s.due <= now)
                .min_by_key(|(_, s)| (s.due, s.generation))
                .map(|(i, _)| i)?;

            let task = self.queue.swap_remove(index);
            if self.is_live(&task) {
                self.live.retain(|(k, _)| *k != task.kind);
                return Some((task.kind, task.due));
            }
            tracing::trace!(generation = task.generation.value(), "Dropping stale timer");
        }
    }

    fn is_live(&self, task: &Scheduled<K>) -> bool {
        self.live
            .iter()
            .any(|(k, g)| *k == task.kind && *g == task.generation)
    }
}

impl<K: Copy + Eq> Default for DelayedTasks<K> {
    fn default() -> Self {
        Self::new()
    }
}
