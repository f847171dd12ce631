//! Header component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::strings::{t, Text};
use crate::ui::Theme;

/// Render the header bar: brand, screen title, acting user and clock
pub fn render(frame: &mut Frame, area: Rect, title: &str, user: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border())
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(24),
        ])
        .split(inner);

    let brand = Paragraph::new(format!(" \u{25C9} {}", t(Text::AppName))).style(theme.title());
    frame.render_widget(brand, chunks[0]);

    let title_widget = Paragraph::new(title)
        .style(theme.text())
        .alignment(Alignment::Center);
    frame.render_widget(title_widget, chunks[1]);

    let time = chrono::Local::now().format("%H:%M").to_string();
    let right = Paragraph::new(format!("{}  {} ", user, time))
        .style(theme.text_muted())
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[2]);
}
