//! Outcome policies plugged into the shared pad

use std::time::Duration;

use crate::{Pin, PinError, ENROLL_DELAY, VERIFY_DELAY};

/// Result of evaluating one completed entry
#[derive(Debug)]
pub enum Settlement<T> {
    /// Entry accepted; `retain_entry` keeps the dots filled and ends the
    /// pad's life instead of resetting it for another round
    Accept { output: T, retain_entry: bool },
    /// Entry rejected and recovered locally
    Reject(PinError),
}

/// What to do with a completed 6-digit entry
pub trait SettlePolicy {
    /// Value handed to the host on acceptance
    type Output;

    /// Pacing delay between completion and settlement
    fn settle_delay(&self) -> Duration;

    /// Evaluate a completed entry
    fn settle(&mut self, entry: &Pin) -> Settlement<Self::Output>;
}

/// Compare against a known PIN
#[derive(Debug)]
pub struct VerifyPolicy {
    expected: Pin,
    delay: Duration,
}

impl VerifyPolicy {
    pub fn new(expected: Pin) -> Self {
        Self {
            expected,
            delay: VERIFY_DELAY,
        }
    }
}

impl SettlePolicy for VerifyPolicy {
    type Output = ();

    fn settle_delay(&self) -> Duration {
        self.delay
    }

    fn settle(&mut self, entry: &Pin) -> Settlement<()> {
        // TODO: constant-time comparison once PINs are stored hashed
        if entry.matches(&self.expected) {
            Settlement::Accept {
                output: (),
                retain_entry: true,
            }
        } else {
            Settlement::Reject(PinError::PinMismatch)
        }
    }
}

/// Hand any complete entry upward as the new PIN
#[derive(Debug)]
pub struct EnrollPolicy {
    delay: Duration,
}

impl EnrollPolicy {
    pub fn new() -> Self {
        Self {
            delay: ENROLL_DELAY,
        }
    }
}

impl Default for EnrollPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlePolicy for EnrollPolicy {
    type Output = Pin;

    fn settle_delay(&self) -> Duration {
        self.delay
    }

    fn settle(&mut self, entry: &Pin) -> Settlement<Pin> {
        Settlement::Accept {
            output: entry.clone(),
            retain_entry: false,
        }
    }
}
