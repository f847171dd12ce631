//! Single event view: photo roll and privacy status

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use uuid::Uuid;

use crate::app::App;
use crate::auth::Access;
use crate::ui::components::header;
use crate::ui::layout::{panel, render_hints, ScreenLayout};
use crate::ui::strings::{t, Text};
use crate::utils::{format_elapsed, format_timestamp};

/// Render the detail screen for `id`
pub fn render(frame: &mut Frame, app: &App, id: Uuid) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(frame.area());

    let Some(event) = app.store.get(id) else {
        header::render(frame, layout.header, "Event not found", app.user(), theme);
        render_hints(frame, layout.footer, &[("Esc", "Back")], theme);
        return;
    };

    header::render(frame, layout.header, &event.name, app.user(), theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(layout.content);

    let access = app.access(event);
    let privacy = if event.private {
        Span::styled(format!("{} (PIN protected)", t(Text::PrivateBadge)), theme.danger())
    } else {
        Span::styled("Public", theme.success())
    };
    let via = match access {
        Access::Organizer => "you organize this event".to_string(),
        Access::Granted => match app.grants.age(id, Instant::now()) {
            Some(age) => format!("unlocked {}", format_elapsed(age)),
            None => "unlocked this session".to_string(),
        },
        Access::Open => "anyone can view".to_string(),
        Access::PinRequired => "locked".to_string(),
    };

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Organizer: ", theme.text_secondary()),
            Span::styled(event.organizer.as_str(), theme.text()),
            Span::raw("   "),
            Span::styled("Created: ", theme.text_secondary()),
            Span::styled(format_timestamp(event.created_at), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("Privacy:   ", theme.text_secondary()),
            privacy,
            Span::styled(format!("  ({})", via), theme.text_muted()),
        ]),
    ])
    .block(panel("Event", theme));
    frame.render_widget(summary, chunks[0]);

    let photos_block = panel("Photos", theme);
    if event.photos.is_empty() {
        let empty = Paragraph::new(t(Text::NoPhotos))
            .style(theme.text_muted())
            .alignment(Alignment::Center)
            .block(photos_block);
        frame.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = event
            .photos
            .iter()
            .enumerate()
            .map(|(i, photo)| ListItem::new(format!("{:>3}. {}", i + 1, photo)))
            .collect();
        let list = List::new(items)
            .block(photos_block)
            .style(theme.text())
            .highlight_style(theme.list_item(true))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(
            app.state.photo_index.min(event.photos.len() - 1),
        ));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    let mut hints = vec![("↑/↓", "Browse"), ("Esc", "Back")];
    if event.is_organizer(app.user()) {
        hints.push(if event.private {
            ("p", "Make public")
        } else {
            ("p", "Make private")
        });
    }
    hints.push(("?", "Help"));
    render_hints(frame, layout.footer, &hints, theme);
}
