//! Terminal bell as the failure cue

use std::io::{self, Write};

use photoroll_pin::Haptics;

/// Rings the terminal bell in place of a vibration pulse
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::debug!("Bell failed: {}", e);
        }
    }
}
