//! Organizer flow: choose a PIN for an event

use std::time::Instant;

use crate::{Digit, EnrollPolicy, Indicator, PadPhase, PadSignal, Pin, PinPad};

/// Visible state of the enroller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollerState {
    Idle,
    Collecting,
    Committing,
    Closed,
}

/// What the host hears from an enroller
#[derive(Debug, PartialEq, Eq)]
pub enum EnrollerSignal {
    /// A full PIN was entered; the host persists it and marks the event private
    Enrolled(Pin),
    Closed,
}

/// Keypad that hands any complete 6-digit entry to the host
///
/// There is no wrong value during enrollment, so no error state. Content is
/// not validated: `000000` is a valid PIN.
pub struct PinEnroller {
    pad: PinPad<EnrollPolicy>,
}

impl PinEnroller {
    pub fn new() -> Self {
        Self::with_policy(EnrollPolicy::new())
    }

    pub fn with_policy(policy: EnrollPolicy) -> Self {
        Self {
            pad: PinPad::new(policy),
        }
    }

    pub fn press_digit(&mut self, digit: Digit, now: Instant) {
        self.pad.press_digit(digit, now);
    }

    pub fn press_delete(&mut self) {
        self.pad.press_delete();
    }

    /// Fire due timers; see [`PinPad::advance`] for late polling
    pub fn advance(&mut self, now: Instant) {
        self.pad.advance(now);
    }

    pub fn close(&mut self) {
        self.pad.close();
    }

    pub fn drain_signals(&mut self) -> Vec<EnrollerSignal> {
        self.pad
            .drain_signals()
            .into_iter()
            .map(|signal| match signal {
                PadSignal::Settled(pin) => {
                    tracing::info!("New PIN entered");
                    EnrollerSignal::Enrolled(pin)
                }
                PadSignal::Closed => EnrollerSignal::Closed,
            })
            .collect()
    }

    pub fn state(&self) -> EnrollerState {
        match self.pad.phase() {
            PadPhase::Closed => EnrollerState::Closed,
            PadPhase::Settling => EnrollerState::Committing,
            PadPhase::Collecting => EnrollerState::Collecting,
            // Enrollment never retains an entry, so Accepted is unreachable
            PadPhase::Idle | PadPhase::Accepted => EnrollerState::Idle,
        }
    }

    pub fn current_length(&self) -> usize {
        self.pad.current_length()
    }

    pub fn is_busy(&self) -> bool {
        self.pad.is_busy()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pad.next_deadline()
    }

    pub fn indicator(&self) -> Indicator {
        self.pad.indicator()
    }
}

impl Default for PinEnroller {
    fn default() -> Self {
        Self::new()
    }
}
