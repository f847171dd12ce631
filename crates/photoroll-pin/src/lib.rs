//! Photoroll PIN - access control for private events
//!
//! A private event is gated behind a 6-digit PIN. Organizers set the PIN
//! through a [`PinEnroller`]; viewers unlock the event through a
//! [`PinVerifier`]. Both are thin policies over one shared engine,
//! [`PinPad`], which owns the digit buffer, the pacing delays, the timed
//! error display and the in-flight bookkeeping.
//!
//! # Execution Model
//!
//! Everything here is synchronous and free of I/O. Time is passed in
//! explicitly as an [`Instant`](std::time::Instant): hosts call
//! `press_digit`/`press_delete` as key events arrive and `advance(now)` on
//! every tick of their event loop. Results come back as signals drained
//! with `drain_signals()`.
//!
//! # Security Notice
//!
//! The PIN is compared as a plain string with no hashing and there is no
//! limit on attempts. Both are deliberate to keep the existing storage
//! contract; see the workspace design notes before deploying this anywhere
//! that matters.

pub mod capture;
pub mod enroller;
pub mod error;
pub mod haptics;
pub mod indicator;
pub mod pad;
pub mod pin;
pub mod policy;
pub mod timer;
pub mod verifier;

use std::time::Duration;

pub use capture::{EntryBuffer, PinCapture};
pub use enroller::{EnrollerSignal, EnrollerState, PinEnroller};
pub use error::{PinError, Result};
pub use haptics::{Haptics, NoHaptics, PulseCounter};
pub use indicator::{DotTone, Indicator};
pub use pad::{PadPhase, PadSignal, PinPad};
pub use pin::{Digit, Pin};
pub use policy::{EnrollPolicy, SettlePolicy, Settlement, VerifyPolicy};
pub use timer::{DelayedTasks, Generation};
pub use verifier::{PinVerifier, VerificationOutcome, VerifierSignal, VerifierState};

/// Number of digits in an event PIN
pub const PIN_LENGTH: usize = 6;

/// Pacing delay before a verification resolves
pub const VERIFY_DELAY: Duration = Duration::from_millis(500);

/// Pacing delay before an enrollment is handed to the host
pub const ENROLL_DELAY: Duration = Duration::from_millis(300);

/// How long the mismatch message stays up without further input
pub const ERROR_CLEAR_DELAY: Duration = Duration::from_millis(2000);
