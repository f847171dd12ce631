//! Application state

use uuid::Uuid;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// All events, newest last
    #[default]
    EventList,

    /// Photo roll of one event
    EventDetail(Uuid),

    /// Key reference
    Help,
}

/// Navigation and selection state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Event list selection index
    pub list_index: usize,

    /// Photo list selection index on the detail screen
    pub photo_index: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the list selection, staying within `len` entries
    pub fn select_next(&mut self, len: usize) {
        if self.list_index + 1 < len {
            self.list_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.list_index = self.list_index.saturating_sub(1);
    }

    /// Show an event's roll from the top
    pub fn show_event(&mut self, id: Uuid) {
        self.current_screen = Screen::EventDetail(id);
        self.photo_index = 0;
    }
}
