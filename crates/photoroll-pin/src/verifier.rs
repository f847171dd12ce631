//! Viewer flow: unlock a private event with its PIN

use std::time::{Duration, Instant};

use crate::pad::LastSettlement;
use crate::{
    Digit, Haptics, Indicator, PadPhase, PadSignal, Pin, PinPad, Result, VerifyPolicy,
};

/// Visible state of the verifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifierState {
    Idle,
    Collecting,
    Verifying,
    Unlocked,
    /// Last entry was wrong; entry is empty and the error line is up
    Rejected,
    Closed,
}

/// Resolution of the most recent completed entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Pending,
    Matched,
    Mismatched,
}

/// What the host hears from a verifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifierSignal {
    /// Correct PIN entered; the host records the unlock grant
    Unlocked,
    /// Dismissed by the user
    Closed,
}

/// Keypad that unlocks when the entered PIN equals the expected one
///
/// Wrong entries are unlimited: each clears the dots, shows the error line
/// for [`ERROR_CLEAR_DELAY`](crate::ERROR_CLEAR_DELAY) and fires one haptic
/// pulse. Success is not remembered across instances.
pub struct PinVerifier {
    pad: PinPad<VerifyPolicy>,
}

impl PinVerifier {
    /// Mount a verifier for `correct_pin` as stored by the host
    pub fn new(correct_pin: &str) -> Result<Self> {
        let expected = Pin::parse(correct_pin)?;
        Ok(Self::with_policy(VerifyPolicy::new(expected)))
    }

    pub fn with_policy(policy: VerifyPolicy) -> Self {
        Self {
            pad: PinPad::new(policy),
        }
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.pad = self.pad.with_haptics(haptics);
        self
    }

    pub fn with_error_clear_delay(mut self, delay: Duration) -> Self {
        self.pad = self.pad.with_error_clear_delay(delay);
        self
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

    pub fn drain_signals(&mut self) -> Vec<VerifierSignal> {
        self.pad
            .drain_signals()
            .into_iter()
            .map(|signal| match signal {
                PadSignal::Settled(()) => {
                    tracing::info!("PIN verified");
                    VerifierSignal::Unlocked
                }
                PadSignal::Closed => VerifierSignal::Closed,
            })
            .collect()
    }

    pub fn state(&self) -> VerifierState {
        match self.pad.phase() {
            PadPhase::Closed => VerifierState::Closed,
            PadPhase::Accepted => VerifierState::Unlocked,
            PadPhase::Settling => VerifierState::Verifying,
            PadPhase::Collecting => VerifierState::Collecting,
            PadPhase::Idle if self.pad.is_error_visible() => VerifierState::Rejected,
            PadPhase::Idle => VerifierState::Idle,
        }
    }

    pub fn outcome(&self) -> VerificationOutcome {
        if self.pad.is_busy() {
            return VerificationOutcome::Pending;
        }
        match self.pad.last_settlement() {
            Some(LastSettlement::Accepted) => VerificationOutcome::Matched,
            Some(LastSettlement::Rejected) => VerificationOutcome::Mismatched,
            None => VerificationOutcome::Pending,
        }
    }

    pub fn current_length(&self) -> usize {
        self.pad.current_length()
    }

    pub fn is_busy(&self) -> bool {
        self.pad.is_busy()
    }

    pub fn is_error_visible(&self) -> bool {
        self.pad.is_error_visible()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pad.next_deadline()
    }

    pub fn indicator(&self) -> Indicator {
        self.pad.indicator()
    }
}
