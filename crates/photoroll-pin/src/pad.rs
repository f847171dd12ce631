//! Shared keypad engine
//!
//! [`PinPad`] drives a [`PinCapture`] through a [`SettlePolicy`]:
//!
//! ```text
//! Idle ──digit──▶ Collecting ──6th digit──▶ Settling ──delay──▶ policy
//!   ▲                                                            │
//!   ├──────────── Reject (error shown, buffer cleared) ◀─────────┤
//!   ├──────────── Accept, reset entry ◀──────────────────────────┤
//!   │                                    Accept, retain entry ──▶ Accepted
//! close() from any phase ──▶ Closed
//! ```
//!
//! The keypad stays live while settling. A second entry completed during
//! that window is queued and settled after the first, in arrival order;
//! the in-flight entry is never evaluated twice.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::{
    DelayedTasks, Digit, DotTone, Haptics, Indicator, NoHaptics, Pin, PinCapture, SettlePolicy,
    Settlement, ERROR_CLEAR_DELAY,
};

/// Coarse lifecycle phase of a pad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadPhase {
    /// Empty entry, nothing in flight
    Idle,
    /// Some digits entered
    Collecting,
    /// A completed entry is waiting out the pacing delay
    Settling,
    /// Entry accepted with `retain_entry`; input is ignored from here on
    Accepted,
    /// Dismissed by the host
    Closed,
}

/// Signals for the host, drained with [`PinPad::drain_signals`]
#[derive(Debug, PartialEq, Eq)]
pub enum PadSignal<T> {
    /// The policy accepted an entry
    Settled(T),
    /// The pad was closed
    Closed,
}

/// How the last completed entry resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LastSettlement {
    Accepted,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PadTimer {
    Settle,
    ErrorClear,
}

/// Generic 6-digit keypad parameterized by an outcome policy
pub struct PinPad<P: SettlePolicy> {
    capture: PinCapture,
    policy: P,
    haptics: Box<dyn Haptics>,
    timers: DelayedTasks<PadTimer>,
    error_clear_delay: Duration,
    /// Entry currently waiting on the settle timer
    in_flight: Option<Pin>,
    /// Entries completed while another was in flight
    queued: VecDeque<Pin>,
    error_visible: bool,
    last_settlement: Option<LastSettlement>,
    accepted: bool,
    closed: bool,
    signals: Vec<PadSignal<P::Output>>,
}

impl<P: SettlePolicy> PinPad<P> {
    /// Create a fresh pad: empty entry, no error, not busy
    pub fn new(policy: P) -> Self {
        Self {
            capture: PinCapture::new(),
            policy,
            haptics: Box::new(NoHaptics),
            timers: DelayedTasks::new(),
            error_clear_delay: ERROR_CLEAR_DELAY,
            in_flight: None,
            queued: VecDeque::new(),
            error_visible: false,
            last_settlement: None,
            accepted: false,
            closed: false,
            signals: Vec::new(),
        }
    }

    /// Attach a haptics implementation for rejection pulses
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Override how long the error line stays up
    pub fn with_error_clear_delay(mut self, delay: Duration) -> Self {
        self.error_clear_delay = delay;
        self
    }

    /// Handle a digit key
    pub fn press_digit(&mut self, digit: Digit, now: Instant) {
        if self.is_inert() {
            return;
        }

        // A fresh press always wins over the pending error-clear timer
        if self.error_visible {
            self.error_visible = false;
            self.timers.supersede(PadTimer::ErrorClear);
            tracing::debug!("Error display cleared by new input");
        }
        if self.in_flight.is_none() {
            self.last_settlement = None;
        }

        if let Some(entry) = self.capture.press_digit(digit) {
            self.submit(entry, now);
        }
    }

    /// Handle the delete key
    pub fn press_delete(&mut self) {
        if self.is_inert() {
            return;
        }
        self.capture.press_delete();
    }

    /// Fire every timer due at or before `now`
    ///
    /// Timers fire in deadline order, and follow-up deadlines are chained off
    /// the logical firing time. A host that polls later than
    /// `settle delay + error clear delay` after a wrong entry therefore sees
    /// the mismatch resolve (pulse fired, entry cleared) with the error window
    /// already over. Hosts should call this at least as often as
    /// [`next_deadline`](Self::next_deadline) requires.
    pub fn advance(&mut self, now: Instant) {
        while let Some((timer, fired_at)) = self.timers.pop_due(now) {
            match timer {
                PadTimer::Settle => self.settle(fired_at),
                PadTimer::ErrorClear => {
                    self.error_visible = false;
                    tracing::debug!("Error display timed out");
                }
            }
        }
    }

    /// Dismiss the pad
    ///
    /// Cancels every pending timer and discards the entry. Only a
    /// [`PadSignal::Closed`] is emitted, and nothing after it.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }

        self.timers.cancel_all();
        self.in_flight = None;
        self.queued.clear();
        self.capture.reset();
        self.error_visible = false;
        self.closed = true;
        self.signals.push(PadSignal::Closed);
        tracing::debug!("PIN pad closed");
    }

    /// Take all pending signals in emission order
    pub fn drain_signals(&mut self) -> Vec<PadSignal<P::Output>> {
        std::mem::take(&mut self.signals)
    }

    pub fn phase(&self) -> PadPhase {
        if self.closed {
            PadPhase::Closed
        } else if self.accepted {
            PadPhase::Accepted
        } else if self.in_flight.is_some() {
            PadPhase::Settling
        } else if self.capture.current_length() > 0 {
            PadPhase::Collecting
        } else {
            PadPhase::Idle
        }
    }

    pub fn current_length(&self) -> usize {
        self.capture.current_length()
    }

    /// Whether a completed entry is waiting to settle
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the mismatch error line should be shown
    pub fn is_error_visible(&self) -> bool {
        self.error_visible
    }

    /// Entries waiting behind the in-flight one
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Earliest instant at which [`advance`](Self::advance) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Dot row for rendering
    pub fn indicator(&self) -> Indicator {
        let tone = if self.accepted {
            DotTone::Success
        } else if self.error_visible {
            DotTone::Error
        } else if self.is_busy() {
            DotTone::Busy
        } else {
            DotTone::Normal
        };
        Indicator::new(self.current_length(), tone)
    }

    pub(crate) fn last_settlement(&self) -> Option<LastSettlement> {
        self.last_settlement
    }

    fn is_inert(&self) -> bool {
        self.closed || self.accepted
    }

    fn submit(&mut self, entry: Pin, now: Instant) {
        if self.in_flight.is_some() {
            tracing::debug!(queued = self.queued.len() + 1, "Entry completed while busy, queueing");
            self.queued.push_back(entry);
        } else {
            self.start_settle(entry, now);
        }
    }

    fn start_settle(&mut self, entry: Pin, at: Instant) {
        let due = at + self.policy.settle_delay();
        self.in_flight = Some(entry);
        self.timers.schedule(PadTimer::Settle, due);
        tracing::debug!("Entry complete, settling");
    }

    fn settle(&mut self, at: Instant) {
        let Some(entry) = self.in_flight.take() else {
            return;
        };

        match self.policy.settle(&entry) {
            Settlement::Accept {
                output,
                retain_entry,
            } => {
                self.last_settlement = Some(LastSettlement::Accepted);
                self.error_visible = false;
                self.timers.supersede(PadTimer::ErrorClear);
                if retain_entry {
                    self.accepted = true;
                    self.queued.clear();
                } else {
                    self.capture.reset();
                }
                self.signals.push(PadSignal::Settled(output));
                tracing::debug!(retain_entry, "Entry accepted");
            }
            Settlement::Reject(reason) => {
                self.last_settlement = Some(LastSettlement::Rejected);
                self.capture.reset();
                self.error_visible = true;
                self.haptics.pulse();
                self.timers
                    .schedule(PadTimer::ErrorClear, at + self.error_clear_delay);
                tracing::debug!(%reason, "Entry rejected");
            }
        }

        if !self.accepted {
            if let Some(next) = self.queued.pop_front() {
                self.start_settle(next, at);
            }
        }
    }
}
