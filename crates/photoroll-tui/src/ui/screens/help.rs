//! Help screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::header;
use crate::ui::layout::{panel, render_hints, ScreenLayout};

/// Render the help screen
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    header::render(frame, layout.header, "Help", app.user(), theme);

    let heading = |text: &'static str| Line::from(Span::styled(text, theme.info()));

    let content = Paragraph::new(vec![
        Line::from(""),
        heading("  Navigation:"),
        Line::from("    j/k or Up/Down  - Move selection"),
        Line::from("    Enter           - Open event"),
        Line::from("    Esc or b        - Go back"),
        Line::from("    q               - Quit (from event list)"),
        Line::from("    ?               - Show this help"),
        Line::from(""),
        heading("  Private events:"),
        Line::from("    Locked events ask for a 6-digit PIN."),
        Line::from("    Type digits 0-9, Backspace deletes, Esc cancels."),
        Line::from("    The PIN is checked as soon as the sixth digit is typed."),
        Line::from("    Unlocks last until you quit."),
        Line::from(""),
        heading("  Organizers:"),
        Line::from("    p on an event you organize toggles privacy."),
        Line::from("    Making it private asks you to choose a PIN."),
    ])
    .style(theme.text())
    .block(panel("Keys", theme));
    frame.render_widget(content, layout.content);

    render_hints(frame, layout.footer, &[("Esc", "Back")], theme);
}
