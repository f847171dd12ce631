//! End-to-end flows through the terminal app
//!
//! These tests drive `App` with key presses and synthetic instants, the same
//! way the event loop does, and check what ends up on screen and on disk.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tempfile::{tempdir, TempDir};
use uuid::Uuid;

use photoroll_pin::Pin;
use photoroll_tui::app::{Screen, TuiConfig};
use photoroll_tui::store::EventStore;
use photoroll_tui::ui::components::notification::NotificationLevel;
use photoroll_tui::App;

const WEDDING_PIN: &str = "135790";

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("events.json")
}

/// A store with one private event organized by "ana"
fn seed_private_event(path: &Path) -> Uuid {
    let mut store = EventStore::open(path).unwrap();
    let id = store.create_event("Ana & Leo's Wedding", "ana").unwrap();
    store.add_photo(id, "vows.jpg").unwrap();
    store
        .enable_privacy(id, "ana", &Pin::parse(WEDDING_PIN).unwrap())
        .unwrap();
    id
}

fn app_as(user: &str, path: &Path) -> App {
    let config = TuiConfig {
        user: Some(user.to_string()),
        store_path: Some(path.to_path_buf()),
        haptics: false,
        ..TuiConfig::default()
    };
    App::new(config, EventStore::open(path).unwrap())
}

fn type_pin(app: &mut App, pin: &str, now: Instant) {
    for c in pin.chars() {
        app.handle_key(KeyCode::Char(c), now);
    }
}

fn has_toast(app: &App, level: NotificationLevel) -> bool {
    app.notifications.active().iter().any(|n| n.level == level)
}

#[test]
fn test_guest_unlocks_private_event() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = seed_private_event(&path);
    let mut app = app_as("guest", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    assert!(app.modal.is_some(), "locked event should mount the keypad");
    assert_eq!(app.state.current_screen, Screen::EventList);

    type_pin(&mut app, WEDDING_PIN, t0);

    // Nothing happens before the verify delay elapses
    app.tick(t0 + ms(499));
    assert!(app.modal.is_some());

    app.tick(t0 + ms(500));
    assert!(app.modal.is_none());
    assert_eq!(app.state.current_screen, Screen::EventDetail(id));
    assert!(app.grants.is_unlocked(id));
    assert!(has_toast(&app, NotificationLevel::Success));

    // Coming back to the list and opening again skips the keypad
    app.handle_key(KeyCode::Esc, t0 + ms(600));
    app.handle_key(KeyCode::Enter, t0 + ms(700));
    assert!(app.modal.is_none());
    assert_eq!(app.state.current_screen, Screen::EventDetail(id));
}

#[test]
fn test_wrong_pin_shows_error_then_clears() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = seed_private_event(&path);
    let mut app = app_as("guest", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    type_pin(&mut app, "111111", t0);
    app.tick(t0 + ms(500));

    let modal = app.modal.as_ref().unwrap();
    assert!(modal.is_error_visible());
    assert_eq!(modal.indicator().filled(), 0);
    assert!(!app.grants.is_unlocked(id));

    app.tick(t0 + ms(2499));
    assert!(app.modal.as_ref().unwrap().is_error_visible());
    app.tick(t0 + ms(2500));
    assert!(!app.modal.as_ref().unwrap().is_error_visible());

    // Unlimited retries
    type_pin(&mut app, WEDDING_PIN, t0 + ms(3000));
    app.tick(t0 + ms(3500));
    assert!(app.modal.is_none());
    assert!(app.grants.is_unlocked(id));
}

#[test]
fn test_typing_hides_error_early() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    seed_private_event(&path);
    let mut app = app_as("guest", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    type_pin(&mut app, "000000", t0);
    app.tick(t0 + ms(500));
    assert!(app.modal.as_ref().unwrap().is_error_visible());

    app.handle_key(KeyCode::Char('1'), t0 + ms(800));
    let modal = app.modal.as_ref().unwrap();
    assert!(!modal.is_error_visible());
    assert_eq!(modal.indicator().filled(), 1);

    // The superseded clear timer firing later changes nothing
    app.tick(t0 + ms(2500));
    assert_eq!(app.modal.as_ref().unwrap().indicator().filled(), 1);
}

#[test]
fn test_escape_dismisses_without_unlocking() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = seed_private_event(&path);
    let mut app = app_as("guest", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    type_pin(&mut app, WEDDING_PIN, t0);
    // Closing while the check is in flight cancels it
    app.handle_key(KeyCode::Esc, t0 + ms(100));
    assert!(app.modal.is_none());

    app.tick(t0 + ms(1000));
    assert!(!app.grants.is_unlocked(id));
    assert_eq!(app.state.current_screen, Screen::EventList);
}

#[test]
fn test_organizer_skips_pin() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = seed_private_event(&path);
    let mut app = app_as("ana", &path);

    app.handle_key(KeyCode::Enter, Instant::now());
    assert!(app.modal.is_none());
    assert_eq!(app.state.current_screen, Screen::EventDetail(id));
}

#[test]
fn test_organizer_enrolls_pin() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = {
        let mut store = EventStore::open(&path).unwrap();
        store.create_event("Summer Picnic", "sam").unwrap()
    };
    let mut app = app_as("sam", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    assert_eq!(app.state.current_screen, Screen::EventDetail(id));

    app.handle_key(KeyCode::Char('p'), t0);
    assert!(app.modal.is_some());

    type_pin(&mut app, "000000", t0);
    app.tick(t0 + ms(299));
    assert!(!app.store.get(id).unwrap().private);

    app.tick(t0 + ms(300));
    assert!(app.modal.is_none());
    assert!(has_toast(&app, NotificationLevel::Success));

    // Persisted, leading zeros intact
    let reopened = EventStore::open(&path).unwrap();
    let event = reopened.get(id).unwrap();
    assert!(event.private);
    assert_eq!(event.pin.as_deref(), Some("000000"));

    // A guest must now enter that PIN
    let mut guest = app_as("guest", &path);
    guest.handle_key(KeyCode::Enter, t0);
    type_pin(&mut guest, "000000", t0);
    guest.tick(t0 + ms(500));
    assert!(guest.grants.is_unlocked(id));
}

/// Organizer "sam" with the enroller open on a public event
fn enrolling_organizer(path: &Path) -> (App, Uuid) {
    let id = {
        let mut store = EventStore::open(path).unwrap();
        store.create_event("Summer Picnic", "sam").unwrap()
    };
    let mut app = app_as("sam", path);
    let t0 = Instant::now();
    app.handle_key(KeyCode::Enter, t0);
    app.handle_key(KeyCode::Char('p'), t0);
    assert!(app.modal.is_some());
    (app, id)
}

#[test]
fn test_pin_corrected_during_commit_is_the_one_saved() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let (mut app, id) = enrolling_organizer(&path);
    let t0 = Instant::now();

    type_pin(&mut app, "111111", t0);
    app.handle_key(KeyCode::Backspace, t0 + ms(50));
    type_pin(&mut app, "2", t0 + ms(100));

    // First entry saved, but the correction is still committing
    app.tick(t0 + ms(300));
    assert!(app.modal.is_some());
    assert_eq!(app.store.get(id).unwrap().pin.as_deref(), Some("111111"));

    app.tick(t0 + ms(600));
    assert!(app.modal.is_none());

    let reopened = EventStore::open(&path).unwrap();
    assert_eq!(reopened.get(id).unwrap().pin.as_deref(), Some("111112"));
}

#[test]
fn test_late_tick_still_saves_last_entry() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let (mut app, id) = enrolling_organizer(&path);
    let t0 = Instant::now();

    type_pin(&mut app, "111111", t0);
    app.handle_key(KeyCode::Backspace, t0);
    type_pin(&mut app, "2", t0);

    // One tick past both commit deadlines
    app.tick(t0 + ms(1000));
    assert!(app.modal.is_none());
    assert_eq!(
        EventStore::open(&path).unwrap().get(id).unwrap().pin.as_deref(),
        Some("111112")
    );
}

#[test]
fn test_non_organizer_cannot_toggle_privacy() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = {
        let mut store = EventStore::open(&path).unwrap();
        store.create_event("Summer Picnic", "sam").unwrap()
    };
    let mut app = app_as("guest", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    app.handle_key(KeyCode::Char('p'), t0);

    assert!(app.modal.is_none());
    assert!(has_toast(&app, NotificationLevel::Warning));
    assert!(!EventStore::open(&path).unwrap().get(id).unwrap().private);
}

#[test]
fn test_organizer_disables_privacy() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = seed_private_event(&path);
    let mut app = app_as("ana", &path);
    let t0 = Instant::now();

    app.handle_key(KeyCode::Enter, t0);
    app.handle_key(KeyCode::Char('p'), t0);

    let event = EventStore::open(&path).unwrap().get(id).cloned().unwrap();
    assert!(!event.private);
    assert!(event.pin.is_none());
}

#[test]
fn test_unlock_does_not_survive_restart() {
    let dir = tempdir().unwrap();
    let path = store_path(&dir);
    let id = seed_private_event(&path);
    let t0 = Instant::now();

    let mut first = app_as("guest", &path);
    first.handle_key(KeyCode::Enter, t0);
    type_pin(&mut first, WEDDING_PIN, t0);
    first.tick(t0 + ms(500));
    assert!(first.grants.is_unlocked(id));
    drop(first);

    let mut second = app_as("guest", &path);
    second.handle_key(KeyCode::Enter, t0);
    assert!(second.modal.is_some());
    assert_eq!(second.state.current_screen, Screen::EventList);
}
