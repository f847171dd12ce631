//! Property-based tests for photoroll-pin using proptest
//!
//! These tests drive the keypads with arbitrary press sequences and check
//! the invariants that must hold for every one of them.

use std::time::{Duration, Instant};

use photoroll_pin::{
    Digit, EnrollerSignal, PinCapture, PinEnroller, PinVerifier, VerifierSignal, VerifierState,
    PIN_LENGTH,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Press {
    Digit(u8),
    Delete,
    /// Let some time pass before the next press
    Wait(u64),
}

fn arb_press() -> impl Strategy<Value = Press> {
    prop_oneof![
        6 => (0u8..10).prop_map(Press::Digit),
        2 => Just(Press::Delete),
        1 => (0u64..3000).prop_map(Press::Wait),
    ]
}

fn arb_pin() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, PIN_LENGTH)
        .prop_map(|digits| digits.iter().map(|d| char::from(b'0' + d)).collect())
}

fn digit(v: u8) -> Digit {
    Digit::new(v).unwrap()
}

proptest! {
    // ----------------------------------------
    // Capture Properties
    // ----------------------------------------

    #[test]
    fn capture_length_stays_in_bounds(presses in proptest::collection::vec(arb_press(), 0..200)) {
        let mut capture = PinCapture::new();
        for press in presses {
            match press {
                Press::Digit(v) => { capture.press_digit(digit(v)); }
                Press::Delete => { capture.press_delete(); }
                Press::Wait(_) => {}
            }
            prop_assert!(capture.current_length() <= PIN_LENGTH);
        }
    }

    #[test]
    fn capture_completes_once_per_transition(presses in proptest::collection::vec(arb_press(), 0..200)) {
        let mut capture = PinCapture::new();
        let mut transitions = 0;
        let mut completions = 0;
        for press in presses {
            let before = capture.current_length();
            match press {
                Press::Digit(v) => {
                    if capture.press_digit(digit(v)).is_some() {
                        completions += 1;
                    }
                }
                Press::Delete => { capture.press_delete(); }
                Press::Wait(_) => {}
            }
            if before < PIN_LENGTH && capture.current_length() == PIN_LENGTH {
                transitions += 1;
            }
        }
        prop_assert_eq!(completions, transitions);
    }

    // ----------------------------------------
    // Verifier Properties
    // ----------------------------------------

    #[test]
    fn verifier_invariants_hold(
        pin in arb_pin(),
        presses in proptest::collection::vec(arb_press(), 0..200),
    ) {
        let t0 = Instant::now();
        let mut now = t0;
        let mut verifier = PinVerifier::new(&pin).unwrap();
        let mut unlocks = 0;

        for press in presses {
            match press {
                Press::Digit(v) => verifier.press_digit(digit(v), now),
                Press::Delete => verifier.press_delete(),
                Press::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    verifier.advance(now);
                }
            }

            prop_assert!(verifier.current_length() <= PIN_LENGTH);
            // Error line only ever shows over an empty entry
            if verifier.is_error_visible() {
                prop_assert_eq!(verifier.current_length(), 0);
            }
            unlocks += verifier
                .drain_signals()
                .iter()
                .filter(|s| **s == VerifierSignal::Unlocked)
                .count();
        }

        prop_assert!(unlocks <= 1);
        if unlocks == 1 {
            prop_assert_eq!(verifier.state(), VerifierState::Unlocked);
        }
    }

    #[test]
    fn verifier_close_is_final(
        pin in arb_pin(),
        presses in proptest::collection::vec(arb_press(), 0..50),
    ) {
        let t0 = Instant::now();
        let mut verifier = PinVerifier::new(&pin).unwrap();
        for c in pin.chars() {
            verifier.press_digit(Digit::try_from(c).unwrap(), t0);
        }
        verifier.close();
        prop_assert_eq!(verifier.drain_signals(), vec![VerifierSignal::Closed]);

        let mut now = t0;
        for press in presses {
            match press {
                Press::Digit(v) => verifier.press_digit(digit(v), now),
                Press::Delete => verifier.press_delete(),
                Press::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    verifier.advance(now);
                }
            }
            prop_assert!(verifier.drain_signals().is_empty());
            prop_assert_eq!(verifier.current_length(), 0);
        }
    }

    // ----------------------------------------
    // Enroller Properties
    // ----------------------------------------

    #[test]
    fn enroller_forwards_exactly_what_was_typed(pin in arb_pin()) {
        let t0 = Instant::now();
        let mut enroller = PinEnroller::new();
        for c in pin.chars() {
            enroller.press_digit(Digit::try_from(c).unwrap(), t0);
        }
        enroller.advance(t0 + Duration::from_millis(300));

        let signals = enroller.drain_signals();
        prop_assert_eq!(signals.len(), 1);
        match &signals[0] {
            EnrollerSignal::Enrolled(entered) => prop_assert_eq!(entered.as_str(), pin.as_str()),
            EnrollerSignal::Closed => prop_assert!(false, "unexpected close"),
        }
        prop_assert_eq!(enroller.current_length(), 0);
    }
}
