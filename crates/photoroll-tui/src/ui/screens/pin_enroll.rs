//! Choose-a-PIN dialog shown to organizers

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, PinModal};
use crate::ui::components::keypad;
use crate::ui::layout::dialog_area;
use crate::ui::strings::{t, Text};

/// Draw the PIN enroll dialog over the current screen
pub fn render(frame: &mut Frame, app: &App, modal: &PinModal) {
    let theme = &app.theme;
    let dialog = dialog_area(frame.area(), 54, 17);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(t(Text::EnrollTitle))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Length(2), // Notice
            Constraint::Length(2), // Dots
            Constraint::Length(2), // Status
            Constraint::Length(4), // Keypad legend
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(t(Text::EnrollPrompt))
            .style(theme.text())
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(t(Text::EnrollNotice))
            .style(theme.text_muted())
            .alignment(Alignment::Center),
        chunks[1],
    );

    keypad::render_dots(frame, chunks[2], &modal.indicator(), theme);

    if modal.is_busy() {
        frame.render_widget(
            Paragraph::new(t(Text::Saving))
                .style(theme.info())
                .alignment(Alignment::Center),
            chunks[3],
        );
    }

    keypad::render_legend(frame, chunks[4], theme);

    frame.render_widget(
        Paragraph::new("[0-9] Digit  [⌫] Delete  [Esc] Cancel")
            .style(theme.text_muted())
            .alignment(Alignment::Center),
        chunks[6],
    );
}
