//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod strings;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, PinModal, Screen};

/// Main render function - delegates to the current screen, then overlays
pub fn render(frame: &mut Frame, app: &App) {
    match app.state.current_screen {
        Screen::EventList => screens::event_list::render(frame, app),
        Screen::EventDetail(id) => screens::event_detail::render(frame, app, id),
        Screen::Help => screens::help::render(frame, app),
    }

    match &app.modal {
        Some(modal @ PinModal::Verify { .. }) => screens::pin_verify::render(frame, app, modal),
        Some(modal @ PinModal::Enroll { .. }) => screens::pin_enroll::render(frame, app, modal),
        None => {}
    }

    app.notifications.render(frame, frame.area(), &app.theme);
}
