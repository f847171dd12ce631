//! Access decisions for event rolls
//!
//! The store says whether an event is private; the grants say whether this
//! session already unlocked it. This module combines the two.

mod bell;
mod grants;

pub use bell::TerminalBell;
pub use grants::UnlockGrants;

use crate::store::EventRecord;

/// How the current user may open an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Event is public
    Open,
    /// The user organizes the event and never needs its PIN
    Organizer,
    /// Unlocked earlier this session
    Granted,
    /// Private and not yet unlocked: mount the PIN verifier
    PinRequired,
}

impl Access {
    pub fn decide(event: &EventRecord, user: &str, grants: &UnlockGrants) -> Self {
        if !event.private {
            Access::Open
        } else if event.is_organizer(user) {
            Access::Organizer
        } else if grants.is_unlocked(event.id) {
            Access::Granted
        } else {
            Access::PinRequired
        }
    }

    pub fn is_allowed(self) -> bool {
        self != Access::PinRequired
    }
}
