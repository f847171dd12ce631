//! Toast notification component

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Theme;

/// Notification severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast notification
#[derive(Clone, Debug)]
pub struct Notification {
    /// Message to display
    pub message: String,
    /// Severity level
    pub level: NotificationLevel,
    /// When the toast disappears
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        level: NotificationLevel,
        now: Instant,
        ttl: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: now + ttl,
        }
    }

    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationLevel::Info, now, Duration::from_secs(3))
    }

    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationLevel::Success, now, Duration::from_secs(3))
    }

    pub fn warning(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationLevel::Warning, now, Duration::from_secs(5))
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationLevel::Error, now, Duration::from_secs(6))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Get icon for level
    pub fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Warning => "⚠",
            NotificationLevel::Error => "✗",
        }
    }

    /// Render the notification at the top-right of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = match self.level {
            NotificationLevel::Info => theme.info(),
            NotificationLevel::Success => theme.success(),
            NotificationLevel::Warning => theme.warning(),
            NotificationLevel::Error => theme.danger(),
        };

        let width = (self.message.chars().count() + 6).min(60) as u16;
        let x = area.x + area.width.saturating_sub(width + 2);
        let toast_area = Rect::new(x, area.y + 1, width.min(area.width), 3.min(area.height));

        frame.render_widget(Clear, toast_area);

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let content = Paragraph::new(format!("{} {}", self.icon(), self.message))
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(content, toast_area);
    }
}

/// Notification manager for multiple toasts
pub struct NotificationManager {
    notifications: Vec<Notification>,
    max_visible: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            max_visible: 3,
        }
    }

    /// Add a notification, keeping only the most recent
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        while self.notifications.len() > self.max_visible {
            self.notifications.remove(0);
        }
    }

    /// Drop expired toasts
    pub fn tick(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    /// Render all active notifications, stacked
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (i, notification) in self.notifications.iter().enumerate() {
            let offset_y = (i * 4) as u16;
            let adjusted_area = Rect::new(
                area.x,
                area.y + offset_y,
                area.width,
                area.height.saturating_sub(offset_y),
            );
            notification.render(frame, adjusted_area, theme);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let t0 = Instant::now();
        let mut manager = NotificationManager::new();
        manager.push(Notification::success("done", t0));
        manager.push(Notification::error("failed", t0));

        manager.tick(t0 + Duration::from_secs(4));
        assert_eq!(manager.active().len(), 1);
        assert_eq!(manager.active()[0].level, NotificationLevel::Error);

        manager.tick(t0 + Duration::from_secs(6));
        assert!(manager.active().is_empty());
    }

    #[test]
    fn test_max_visible() {
        let t0 = Instant::now();
        let mut manager = NotificationManager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("n{}", i), t0));
        }
        assert_eq!(manager.active().len(), 3);
        assert_eq!(manager.active()[0].message, "n2");
    }
}
