//! Photoroll TUI library
//!
//! Terminal front end for browsing event photo rolls. Private events are
//! gated behind a 6-digit PIN entered on an on-screen keypad; organizers
//! choose that PIN when they make an event private.

pub mod app;
pub mod auth;
pub mod store;
pub mod ui;
pub mod utils;

pub use app::App;
