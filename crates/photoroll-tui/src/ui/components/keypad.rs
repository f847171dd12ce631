//! PIN dot row and on-screen keypad legend

use photoroll_pin::Indicator;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Filled dot
const DOT_FILLED: char = '\u{25CF}';
/// Empty dot
const DOT_EMPTY: char = '\u{25CB}';

/// Keypad legend shown under the dots
const KEYPAD_ROWS: [&str; 4] = ["1  2  3", "4  5  6", "7  8  9", "   0  \u{232B}"];

/// Text for the dot row, e.g. `[ ● ● ○ ○ ○ ○ ]`
pub fn dot_text(indicator: &Indicator) -> String {
    format!("[ {} ]", indicator.render(DOT_FILLED, DOT_EMPTY))
}

/// Render the dot row centered in `area`
pub fn render_dots(frame: &mut Frame, area: Rect, indicator: &Indicator, theme: &Theme) {
    let dots = Paragraph::new(dot_text(indicator))
        .style(theme.pin_dots(indicator.tone()))
        .alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

/// Render the digit legend centered in `area`
pub fn render_legend(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = KEYPAD_ROWS.iter().map(|row| Line::from(*row)).collect();
    let legend = Paragraph::new(lines)
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use photoroll_pin::DotTone;

    #[test]
    fn test_dot_text() {
        let indicator = Indicator::new(3, DotTone::Normal);
        assert_eq!(dot_text(&indicator), "[ ● ● ● ○ ○ ○ ]");
    }
}
