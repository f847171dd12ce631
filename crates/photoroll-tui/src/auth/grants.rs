//! Session-scoped unlock grants
//!
//! A grant records that this session passed PIN verification for an event.
//! Grants are held in memory only and vanish when the application exits.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Events unlocked during the current session
#[derive(Clone, Debug, Default)]
pub struct UnlockGrants {
    granted: HashMap<Uuid, Instant>,
}

impl UnlockGrants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful verification
    pub fn grant(&mut self, event: Uuid, now: Instant) {
        self.granted.insert(event, now);
        tracing::debug!(%event, "Unlock grant recorded");
    }

    /// Drop a grant, e.g. after the organizer changes the PIN
    pub fn revoke(&mut self, event: Uuid) -> bool {
        self.granted.remove(&event).is_some()
    }

    pub fn is_unlocked(&self, event: Uuid) -> bool {
        self.granted.contains_key(&event)
    }

    /// How long ago the grant was recorded
    pub fn age(&self, event: Uuid, now: Instant) -> Option<Duration> {
        self.granted
            .get(&event)
            .map(|at| now.saturating_duration_since(*at))
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_revoke() {
        let now = Instant::now();
        let mut grants = UnlockGrants::new();
        let event = Uuid::new_v4();

        assert!(!grants.is_unlocked(event));
        grants.grant(event, now);
        assert!(grants.is_unlocked(event));
        assert_eq!(grants.len(), 1);

        assert!(grants.revoke(event));
        assert!(!grants.revoke(event));
        assert!(grants.is_empty());
    }

    #[test]
    fn test_age() {
        let t0 = Instant::now();
        let mut grants = UnlockGrants::new();
        let event = Uuid::new_v4();
        grants.grant(event, t0);
        assert_eq!(
            grants.age(event, t0 + Duration::from_secs(90)),
            Some(Duration::from_secs(90))
        );
        assert_eq!(grants.age(Uuid::new_v4(), t0), None);
    }
}
