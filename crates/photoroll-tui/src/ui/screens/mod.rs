//! Screen renderers

pub mod event_detail;
pub mod event_list;
pub mod help;
pub mod pin_enroll;
pub mod pin_verify;
