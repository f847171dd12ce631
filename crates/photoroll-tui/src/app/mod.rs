//! Application state and event handling

pub mod config;
pub mod events;
mod modal;
mod state;

pub use config::{ConfigError, TuiConfig};
pub use modal::{ModalOutcome, PinModal};
pub use state::{AppState, Screen};

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEventKind};
use photoroll_pin::{Digit, Pin, PinEnroller, PinVerifier};
use ratatui::prelude::*;
use uuid::Uuid;

use crate::auth::{Access, TerminalBell, UnlockGrants};
use crate::store::{EventRecord, EventStore};
use crate::ui::components::notification::{Notification, NotificationManager};
use crate::ui::{self, Theme};
use events::{Event, EventHandler};

/// Main application struct
pub struct App {
    /// Navigation state
    pub state: AppState,

    /// Visual theme
    pub theme: Theme,

    /// Loaded configuration
    pub config: TuiConfig,

    /// Event roll persistence
    pub store: EventStore,

    /// Events unlocked this session
    pub grants: UnlockGrants,

    /// Mounted PIN keypad, if any
    pub modal: Option<PinModal>,

    /// Toasts
    pub notifications: NotificationManager,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Acting user name
    user: String,
}

impl App {
    /// Create a new application instance
    pub fn new(config: TuiConfig, store: EventStore) -> Self {
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };
        let user = config.user_name();

        Self {
            state: AppState::new(),
            theme,
            config,
            store,
            grants: UnlockGrants::new(),
            modal: None,
            notifications: NotificationManager::new(),
            should_quit: false,
            user,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.config.tick_rate());

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match events.next().await {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key.code, Instant::now());
                }
                Some(Event::Tick) => self.tick(Instant::now()),
                Some(_) => {}
                None => break,
            }
        }

        Ok(())
    }

    /// Advance timers: PIN pad deadlines and toast expiry
    pub fn tick(&mut self, now: Instant) {
        if let Some(modal) = self.modal.as_mut() {
            modal.advance(now);
        }
        self.process_modal(now);
        self.notifications.tick(now);
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        // A mounted keypad captures all input
        if self.modal.is_some() {
            self.handle_modal_key(key, now);
            return;
        }

        match self.state.current_screen {
            Screen::EventList => self.handle_list_key(key, now),
            Screen::EventDetail(id) => self.handle_detail_key(id, key, now),
            Screen::Help => self.handle_help_key(key),
        }
    }

    /// Currently highlighted event on the list screen
    pub fn selected_event(&self) -> Option<&EventRecord> {
        self.store.events().get(self.state.list_index)
    }

    /// How the acting user may open `event`
    pub fn access(&self, event: &EventRecord) -> Access {
        Access::decide(event, &self.user, &self.grants)
    }

    fn handle_modal_key(&mut self, key: KeyCode, now: Instant) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        match key {
            KeyCode::Char(c) => {
                if let Ok(digit) = Digit::try_from(c) {
                    modal.press_digit(digit, now);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => modal.press_delete(),
            KeyCode::Esc => modal.close(),
            _ => {}
        }

        self.process_modal(now);
    }

    fn handle_list_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select_next(self.store.events().len());
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_event().map(|e| e.id) {
                    self.open_event(id, now);
                }
            }
            KeyCode::Char('?') => self.state.current_screen = Screen::Help,
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, id: Uuid, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.state.current_screen = Screen::EventList;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.photo_index = self.state.photo_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.store.get(id).map_or(0, |e| e.photos.len());
                if self.state.photo_index + 1 < count {
                    self.state.photo_index += 1;
                }
            }
            KeyCode::Char('p') => self.toggle_privacy(id, now),
            KeyCode::Char('?') => self.state.current_screen = Screen::Help,
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.state.current_screen = Screen::EventList;
            }
            _ => {}
        }
    }

    /// Show an event, mounting the verifier first if it is locked
    fn open_event(&mut self, id: Uuid, now: Instant) {
        let Some(event) = self.store.get(id) else {
            return;
        };

        if self.access(event).is_allowed() {
            self.state.show_event(id);
            return;
        }

        let pin = match self.store.access_pin(id) {
            Ok(Some(pin)) => pin,
            Ok(None) => {
                self.state.show_event(id);
                return;
            }
            Err(e) => {
                tracing::warn!(event = %id, "Cannot mount PIN verifier: {}", e);
                self.notify(Notification::error(e.to_string(), now));
                return;
            }
        };

        match PinVerifier::new(&pin) {
            Ok(verifier) => {
                let verifier = if self.config.haptics {
                    verifier.with_haptics(TerminalBell)
                } else {
                    verifier
                };
                tracing::debug!(event = %id, "Mounting PIN verifier");
                self.modal = Some(PinModal::Verify {
                    event: id,
                    verifier,
                });
            }
            Err(e) => self.notify(Notification::error(e.to_string(), now)),
        }
    }

    /// Organizer toggles privacy: enrolling a PIN, or dropping it
    fn toggle_privacy(&mut self, id: Uuid, now: Instant) {
        let Some(event) = self.store.get(id) else {
            return;
        };

        if !event.is_organizer(&self.user) {
            self.notify(Notification::warning(
                "Only the organizer can change privacy",
                now,
            ));
            return;
        }

        if event.private {
            match self.store.disable_privacy(id, &self.user) {
                Ok(()) => self.notify(Notification::info("Event is now public", now)),
                Err(e) => self.notify(Notification::error(e.to_string(), now)),
            }
        } else {
            tracing::debug!(event = %id, "Mounting PIN enroller");
            self.modal = Some(PinModal::Enroll {
                event: id,
                enroller: PinEnroller::new(),
            });
        }
    }

    /// Act on whatever the mounted keypad has signalled
    fn process_modal(&mut self, now: Instant) {
        let outcomes = match self.modal.as_mut() {
            Some(modal) => modal.drain(),
            None => return,
        };

        for outcome in outcomes {
            match outcome {
                ModalOutcome::Unlocked(id) => {
                    self.grants.grant(id, now);
                    self.modal = None;
                    self.state.show_event(id);
                    self.notify(Notification::success("Event unlocked", now));
                }
                ModalOutcome::Enrolled(id, pin) => self.commit_pin(id, &pin, now),
                ModalOutcome::Closed(id) => {
                    tracing::debug!(event = %id, "PIN keypad dismissed");
                    self.modal = None;
                }
            }
        }
    }

    fn commit_pin(&mut self, id: Uuid, pin: &Pin, now: Instant) {
        match self.store.enable_privacy(id, &self.user, pin) {
            Ok(()) => {
                // Any earlier unlock was for the old PIN
                self.grants.revoke(id);
                // An entry completed during the commit is still settling; the last one wins
                if self.modal.as_ref().is_some_and(|m| m.is_busy()) {
                    tracing::debug!(event = %id, "Newer PIN entry pending, keeping enroller up");
                    return;
                }
                self.modal = None;
                self.notify(Notification::success("PIN set, event is now private", now));
            }
            Err(e) => {
                // The enroller has already reset itself; leave it up for another try
                tracing::warn!(event = %id, "Failed to store PIN: {}", e);
                self.notify(Notification::error(e.to_string(), now));
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
