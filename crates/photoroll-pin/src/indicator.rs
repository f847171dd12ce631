//! Dot indicator state derived from a pad
//!
//! Renderers only ever see how many slots are filled and which tone to
//! draw them in.

use crate::PIN_LENGTH;

/// Colouring hint for the dot row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotTone {
    Normal,
    /// A completed entry is being evaluated
    Busy,
    /// The last entry was rejected and the error line is up
    Error,
    /// The entry was accepted
    Success,
}

/// Snapshot of what the dot row should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    filled: usize,
    tone: DotTone,
}

impl Indicator {
    pub fn new(filled: usize, tone: DotTone) -> Self {
        Self {
            filled: filled.min(PIN_LENGTH),
            tone,
        }
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn tone(&self) -> DotTone {
        self.tone
    }

    /// Filled flag per slot, left to right
    pub fn slots(&self) -> [bool; PIN_LENGTH] {
        let mut slots = [false; PIN_LENGTH];
        for slot in slots.iter_mut().take(self.filled) {
            *slot = true;
        }
        slots
    }

    /// Render the row as text, e.g. `● ● ○ ○ ○ ○`
    pub fn render(&self, filled: char, empty: char) -> String {
        self.slots()
            .iter()
            .map(|&on| if on { filled } else { empty }.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
