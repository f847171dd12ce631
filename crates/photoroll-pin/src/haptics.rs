//! Tactile feedback hook

use std::cell::Cell;
use std::rc::Rc;

/// Host-provided failure cue, fired once per rejected entry
pub trait Haptics {
    fn pulse(&mut self);
}

/// Haptics that do nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self) {}
}

/// Counts pulses; clones share the same counter
#[derive(Clone, Debug, Default)]
pub struct PulseCounter(Rc<Cell<u32>>);

impl PulseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.0.get()
    }
}

impl Haptics for PulseCounter {
    fn pulse(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
