#![no_main]

use libfuzzer_sys::fuzz_target;
use photoroll_pin::{Pin, PIN_LENGTH};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(pin) = Pin::parse(text) {
        assert_eq!(pin.as_str(), text);
        assert_eq!(text.len(), PIN_LENGTH);
        assert!(text.bytes().all(|b| b.is_ascii_digit()));
        assert!(pin.matches(&Pin::parse(text).unwrap()));
    }
});
