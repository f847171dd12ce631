//! Digit and PIN value types

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::{PinError, Result, PIN_LENGTH};

/// A single keypad digit, 0 through 9
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value
    pub fn new(value: u8) -> Result<Self> {
        if value > 9 {
            return Err(PinError::DigitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Numeric value of the digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = PinError;

    fn try_from(c: char) -> Result<Self> {
        c.to_digit(10)
            .filter(|_| c.is_ascii_digit())
            .map(|v| Self(v as u8))
            .ok_or(PinError::InvalidDigit(c))
    }
}

/// A complete 6-digit PIN
///
/// The backing string is wiped on drop. `Debug` never prints the digits.
#[derive(Clone)]
pub struct Pin(Zeroizing<String>);

impl Pin {
    /// Parse a PIN supplied by the host (e.g. loaded from the event store)
    pub fn parse(value: &str) -> Result<Self> {
        let len = value.chars().count();
        if len != PIN_LENGTH {
            return Err(PinError::InvalidPinLength(len));
        }

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(PinError::InvalidPinFormat);
        }

        Ok(Self(Zeroizing::new(value.to_string())))
    }

    /// Build a PIN from a full digit buffer
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        debug_assert_eq!(digits.len(), PIN_LENGTH);
        let value: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        Self(Zeroizing::new(value))
    }

    /// The PIN as a string of ASCII digits
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Exact string comparison, no normalization
    pub fn matches(&self, other: &Pin) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Pin {}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(******)")
    }
}

impl FromStr for Pin {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
