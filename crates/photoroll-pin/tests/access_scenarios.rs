//! Unlock and enrollment scenarios driven through the public API

use std::time::{Duration, Instant};

use photoroll_pin::{
    Digit, DotTone, EnrollerSignal, EnrollerState, Pin, PinEnroller, PinVerifier, PulseCounter,
    VerificationOutcome, VerifierSignal, VerifierState,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn press_all(digits: &[u8], mut press: impl FnMut(Digit)) {
    for &d in digits {
        press(Digit::new(d).unwrap());
    }
}

#[test]
fn test_wrong_pin_then_correct_pin_unlocks_once() {
    let t0 = Instant::now();
    let pulses = PulseCounter::new();
    let mut verifier = PinVerifier::new("135790")
        .unwrap()
        .with_haptics(pulses.clone());

    press_all(&[1, 3, 5, 7, 9, 1], |d| verifier.press_digit(d, t0));
    verifier.advance(t0 + ms(500));

    assert_eq!(verifier.state(), VerifierState::Rejected);
    assert_eq!(verifier.outcome(), VerificationOutcome::Mismatched);
    assert_eq!(verifier.current_length(), 0);
    assert!(verifier.is_error_visible());
    assert_eq!(verifier.indicator().tone(), DotTone::Error);
    assert_eq!(pulses.count(), 1);

    let t1 = t0 + ms(900);
    press_all(&[1, 3, 5, 7, 9, 0], |d| verifier.press_digit(d, t1));
    assert!(!verifier.is_error_visible());
    verifier.advance(t1 + ms(500));

    assert_eq!(verifier.state(), VerifierState::Unlocked);
    assert_eq!(verifier.drain_signals(), vec![VerifierSignal::Unlocked]);

    // Nothing more arrives however long we wait
    verifier.advance(t1 + ms(60_000));
    assert!(verifier.drain_signals().is_empty());
}

#[test]
fn test_digit_press_beats_error_timer() {
    let t0 = Instant::now();
    let mut verifier = PinVerifier::new("135790").unwrap();

    press_all(&[0, 0, 0, 0, 0, 0], |d| verifier.press_digit(d, t0));
    verifier.advance(t0 + ms(500));
    assert!(verifier.is_error_visible());

    verifier.press_digit(Digit::new(4).unwrap(), t0 + ms(1000));
    assert!(!verifier.is_error_visible());
    assert_eq!(verifier.state(), VerifierState::Collecting);

    // The stale clear timer fires into nothing
    verifier.advance(t0 + ms(2500));
    assert_eq!(verifier.current_length(), 1);
    assert!(!verifier.is_error_visible());
}

#[test]
fn test_enrollment_of_all_zero_pin() {
    let t0 = Instant::now();
    let mut enroller = PinEnroller::new();

    press_all(&[0, 0, 0, 0, 0, 0], |d| enroller.press_digit(d, t0));
    assert!(enroller.is_busy());
    enroller.advance(t0 + ms(300));

    assert_eq!(
        enroller.drain_signals(),
        vec![EnrollerSignal::Enrolled(Pin::parse("000000").unwrap())]
    );
    assert_eq!(enroller.current_length(), 0);
    assert_eq!(enroller.state(), EnrollerState::Idle);
}

#[test]
fn test_fresh_instances_share_no_state() {
    let t0 = Instant::now();

    let mut first = PinVerifier::new("135790").unwrap();
    press_all(&[9, 9, 9, 9, 9, 9], |d| first.press_digit(d, t0));
    first.advance(t0 + ms(500));
    assert!(first.is_error_visible());
    first.close();

    let second = PinVerifier::new("135790").unwrap();
    assert_eq!(second.current_length(), 0);
    assert!(!second.is_error_visible());
    assert!(!second.is_busy());
    assert_eq!(second.state(), VerifierState::Idle);

    let enroller = PinEnroller::new();
    assert_eq!(enroller.current_length(), 0);
    assert!(!enroller.is_busy());
}

#[test]
fn test_enrolled_pin_unlocks_new_verifier() {
    let t0 = Instant::now();
    let mut enroller = PinEnroller::new();
    press_all(&[0, 4, 8, 2, 1, 3], |d| enroller.press_digit(d, t0));
    enroller.advance(t0 + ms(300));

    let stored = match enroller.drain_signals().pop() {
        Some(EnrollerSignal::Enrolled(pin)) => pin.as_str().to_string(),
        other => panic!("expected enrollment, got {:?}", other),
    };
    assert_eq!(stored, "048213");

    let mut verifier = PinVerifier::new(&stored).unwrap();
    press_all(&[0, 4, 8, 2, 1, 3], |d| verifier.press_digit(d, t0 + ms(400)));
    verifier.advance(t0 + ms(900));
    assert_eq!(verifier.drain_signals(), vec![VerifierSignal::Unlocked]);
}
