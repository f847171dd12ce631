//! Digit capture engine shared by the verifier and the enroller

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::{Digit, Pin, PIN_LENGTH};

/// In-progress digits, at most [`PIN_LENGTH`] of them
///
/// Contents are wiped on [`clear`](Self::clear) and on drop.
pub struct EntryBuffer {
    digits: Zeroizing<Vec<u8>>,
}

impl EntryBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            digits: Zeroizing::new(Vec::with_capacity(PIN_LENGTH)),
        }
    }

    /// Append a digit; returns false when already full
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.digits.push(digit.value());
        true
    }

    /// Drop the last digit; returns false when empty
    pub fn pop(&mut self) -> bool {
        match self.digits.last_mut() {
            Some(last) => {
                last.zeroize();
                self.digits.pop();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.digits.len() >= PIN_LENGTH
    }

    /// Wipe all digits
    pub fn clear(&mut self) {
        self.digits.zeroize();
    }

    /// Copy out the buffered value once full
    fn snapshot(&self) -> Option<Pin> {
        self.is_full().then(|| Pin::from_digits(&self.digits))
    }
}

impl Default for EntryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryBuffer")
            .field("len", &self.len())
            .finish()
    }
}

/// Collects exactly [`PIN_LENGTH`] digits from discrete key presses
///
/// Completion is edge-triggered: [`press_digit`](Self::press_digit) hands
/// back the full PIN only on the press that moves the buffer into the full
/// state. Presses against a full buffer are ignored, so a buffer that is
/// never reset can complete at most once. Clearing after completion is left
/// to the caller.
#[derive(Debug, Default)]
pub struct PinCapture {
    buffer: EntryBuffer,
}

impl PinCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit, returning the completed PIN on the transition to full
    pub fn press_digit(&mut self, digit: Digit) -> Option<Pin> {
        if !self.buffer.push(digit) {
            tracing::trace!("Ignoring digit, entry already complete");
            return None;
        }
        self.buffer.snapshot()
    }

    /// Remove the last digit; no-op on an empty buffer
    pub fn press_delete(&mut self) -> bool {
        self.buffer.pop()
    }

    /// Number of digits entered, for dot rendering
    pub fn current_length(&self) -> usize {
        self.buffer.len()
    }

    /// Discard the entry
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}
