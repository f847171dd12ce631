//! Screen regions and shared chrome

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::Theme;

/// Header bar, body and one-line key hint strip
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            content,
            footer,
        }
    }
}

/// Area for a modal dialog of at most `width` x `height`, centered in `area`
pub fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    dialog
}

/// Key hints as one line: keys in the accent color, actions muted
pub fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, theme.title()));
        spans.push(Span::styled(format!(" {}", action), theme.text_muted()));
    }
    Line::from(spans)
}

pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(hint_line(hints, theme)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Rounded panel with a title
pub fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
}
