//! Unlock dialog for private events

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, PinModal};
use crate::ui::components::keypad;
use crate::ui::layout::dialog_area;
use crate::ui::strings::{t, Text};

/// Draw the PIN verify dialog over the current screen
pub fn render(frame: &mut Frame, app: &App, modal: &PinModal) {
    let theme = &app.theme;
    let area = frame.area();
    let dialog = dialog_area(area, 50, 17);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(t(Text::UnlockTitle))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Event name
            Constraint::Length(2), // Instructions
            Constraint::Length(2), // Dots
            Constraint::Length(2), // Status line
            Constraint::Length(4), // Keypad legend
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let name = app
        .store
        .get(modal.event())
        .map(|e| e.name.as_str())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(name)
            .style(theme.text())
            .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(t(Text::UnlockPrompt))
            .style(theme.text_secondary())
            .alignment(Alignment::Center),
        chunks[1],
    );

    keypad::render_dots(frame, chunks[2], &modal.indicator(), theme);

    let status = if modal.is_error_visible() {
        Some((t(Text::WrongPin), theme.danger()))
    } else if modal.is_busy() {
        Some((t(Text::Checking), theme.info()))
    } else {
        None
    };
    if let Some((text, style)) = status {
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
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
