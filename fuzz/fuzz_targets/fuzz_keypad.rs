#![no_main]

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use photoroll_pin::{
    Digit, EnrollerSignal, PinEnroller, PinVerifier, VerifierSignal, VerifierState, PIN_LENGTH,
};

#[derive(Arbitrary, Debug)]
enum Op {
    Digit(u8),
    Delete,
    Wait(u16),
    Close,
}

#[derive(Arbitrary, Debug)]
struct Input {
    expected: [u8; PIN_LENGTH],
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let expected: String = input
        .expected
        .iter()
        .map(|d| char::from(b'0' + d % 10))
        .collect();

    let Ok(mut verifier) = PinVerifier::new(&expected) else {
        return;
    };
    let mut enroller = PinEnroller::new();

    let mut now = Instant::now();
    let mut unlocks = 0;
    let mut closed = false;

    for op in &input.ops {
        match op {
            Op::Digit(d) => {
                let Ok(digit) = Digit::new(d % 10) else {
                    continue;
                };
                verifier.press_digit(digit, now);
                enroller.press_digit(digit, now);
            }
            Op::Delete => {
                verifier.press_delete();
                enroller.press_delete();
            }
            Op::Wait(ms) => {
                now += Duration::from_millis(u64::from(*ms));
                verifier.advance(now);
                enroller.advance(now);
            }
            Op::Close => {
                verifier.close();
                enroller.close();
                closed = true;
            }
        }

        assert!(verifier.current_length() <= PIN_LENGTH);
        assert!(enroller.current_length() <= PIN_LENGTH);
        if verifier.is_error_visible() {
            assert_eq!(verifier.current_length(), 0);
        }

        for signal in verifier.drain_signals() {
            if signal == VerifierSignal::Unlocked {
                assert!(!closed, "unlock after close");
                unlocks += 1;
            }
        }
        for signal in enroller.drain_signals() {
            if let EnrollerSignal::Enrolled(pin) = signal {
                assert!(!closed, "enroll after close");
                assert_eq!(pin.as_str().len(), PIN_LENGTH);
            }
        }
    }

    assert!(unlocks <= 1);
    if closed {
        assert_eq!(verifier.state(), VerifierState::Closed);
    }
});
