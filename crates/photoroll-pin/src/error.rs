//! Error types for PIN handling

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PinError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinError {
    #[error("Not a digit: {0:?}")]
    InvalidDigit(char),

    #[error("Digit value out of range: {0}")]
    DigitOutOfRange(u8),

    #[error("PIN must be exactly {expected} digits, got {0}", expected = crate::PIN_LENGTH)]
    InvalidPinLength(usize),

    #[error("PIN must contain only digits")]
    InvalidPinFormat,

    /// A completed entry did not equal the expected PIN.
    ///
    /// Always recovered inside the verifier; hosts never receive it.
    #[error("PIN does not match")]
    PinMismatch,
}
