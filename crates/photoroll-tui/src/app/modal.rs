//! The PIN modal mounted over the current screen

use std::time::Instant;

use photoroll_pin::{
    Digit, EnrollerSignal, Indicator, Pin, PinEnroller, PinVerifier, VerifierSignal,
};
use uuid::Uuid;

/// One mounted keypad, tied to the event it guards
pub enum PinModal {
    /// Viewer unlocking a private event
    Verify { event: Uuid, verifier: PinVerifier },
    /// Organizer choosing a PIN to make an event private
    Enroll { event: Uuid, enroller: PinEnroller },
}

/// What the host must act on after draining a modal
#[derive(Debug, PartialEq, Eq)]
pub enum ModalOutcome {
    Unlocked(Uuid),
    Enrolled(Uuid, Pin),
    Closed(Uuid),
}

impl PinModal {
    pub fn event(&self) -> Uuid {
        match self {
            PinModal::Verify { event, .. } | PinModal::Enroll { event, .. } => *event,
        }
    }

    pub fn press_digit(&mut self, digit: Digit, now: Instant) {
        match self {
            PinModal::Verify { verifier, .. } => verifier.press_digit(digit, now),
            PinModal::Enroll { enroller, .. } => enroller.press_digit(digit, now),
        }
    }

    pub fn press_delete(&mut self) {
        match self {
            PinModal::Verify { verifier, .. } => verifier.press_delete(),
            PinModal::Enroll { enroller, .. } => enroller.press_delete(),
        }
    }

    pub fn advance(&mut self, now: Instant) {
        match self {
            PinModal::Verify { verifier, .. } => verifier.advance(now),
            PinModal::Enroll { enroller, .. } => enroller.advance(now),
        }
    }

    pub fn close(&mut self) {
        match self {
            PinModal::Verify { verifier, .. } => verifier.close(),
            PinModal::Enroll { enroller, .. } => enroller.close(),
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self {
            PinModal::Verify { verifier, .. } => verifier.indicator(),
            PinModal::Enroll { enroller, .. } => enroller.indicator(),
        }
    }

    pub fn is_busy(&self) -> bool {
        match self {
            PinModal::Verify { verifier, .. } => verifier.is_busy(),
            PinModal::Enroll { enroller, .. } => enroller.is_busy(),
        }
    }

    pub fn is_error_visible(&self) -> bool {
        match self {
            PinModal::Verify { verifier, .. } => verifier.is_error_visible(),
            PinModal::Enroll { .. } => false,
        }
    }

    /// Take pending signals as host-level outcomes
    pub fn drain(&mut self) -> Vec<ModalOutcome> {
        match self {
            PinModal::Verify { event, verifier } => verifier
                .drain_signals()
                .into_iter()
                .map(|signal| match signal {
                    VerifierSignal::Unlocked => ModalOutcome::Unlocked(*event),
                    VerifierSignal::Closed => ModalOutcome::Closed(*event),
                })
                .collect(),
            PinModal::Enroll { event, enroller } => enroller
                .drain_signals()
                .into_iter()
                .map(|signal| match signal {
                    EnrollerSignal::Enrolled(pin) => ModalOutcome::Enrolled(*event, pin),
                    EnrollerSignal::Closed => ModalOutcome::Closed(*event),
                })
                .collect(),
        }
    }
}
