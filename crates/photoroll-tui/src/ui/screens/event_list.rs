//! Event roll list

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::app::App;
use crate::auth::Access;
use crate::store::EventRecord;
use crate::ui::components::header;
use crate::ui::layout::{panel, render_hints, ScreenLayout};
use crate::ui::strings::{t, Text};
use crate::utils::{format_relative_time, truncate};

/// Render the event list screen
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    let title = if app.grants.is_empty() {
        format!("Events ({})", app.store.events().len())
    } else {
        format!(
            "Events ({}, {} unlocked)",
            app.store.events().len(),
            app.grants.len()
        )
    };
    header::render(frame, layout.header, &title, app.user(), theme);

    if app.store.is_empty() {
        let empty = Paragraph::new(t(Text::NoEvents))
            .style(theme.text_muted())
            .alignment(Alignment::Center)
            .block(panel("Rolls", theme));
        frame.render_widget(empty, layout.content);
    } else {
        render_table(frame, layout.content, app);
    }

    let hints = &[
        ("↑/↓", "Navigate"),
        ("Enter", "Open"),
        ("?", "Help"),
        ("q", "Quit"),
    ];
    render_hints(frame, layout.footer, hints, theme);
}

/// Lock marker for an event as seen by the acting user
fn access_marker(access: Access) -> &'static str {
    match access {
        Access::Open => " ",
        Access::Organizer => "★",
        Access::Granted => "🔓",
        Access::PinRequired => "🔒",
    }
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let header_cells = ["", "Event", "Organizer", "Photos", "Created", ""]
        .iter()
        .map(|h| Cell::from(*h).style(theme.text_secondary()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .store
        .events()
        .iter()
        .map(|event| event_row(app, event))
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(16),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel("Rolls", theme))
        .highlight_style(theme.list_item(true))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(
        app.state
            .list_index
            .min(app.store.events().len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(table, area, &mut state);
}

fn event_row<'a>(app: &App, event: &'a EventRecord) -> Row<'a> {
    let theme = &app.theme;
    let access = app.access(event);

    let marker_style = match access {
        Access::PinRequired => theme.warning(),
        Access::Granted => theme.success(),
        _ => theme.text_muted(),
    };
    let badge = if event.private {
        Cell::from(t(Text::PrivateBadge)).style(theme.danger())
    } else {
        Cell::from("")
    };

    Row::new(vec![
        Cell::from(access_marker(access)).style(marker_style),
        Cell::from(truncate(&event.name, 40)),
        Cell::from(truncate(&event.organizer, 12)).style(theme.text_secondary()),
        Cell::from(event.photos.len().to_string()),
        Cell::from(format_relative_time(event.created_at)).style(theme.text_muted()),
        badge,
    ])
    .style(theme.text())
}
