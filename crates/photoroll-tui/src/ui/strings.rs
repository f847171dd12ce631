//! User-facing strings

/// Keys for UI copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    AppName,
    UnlockTitle,
    UnlockPrompt,
    WrongPin,
    Checking,
    EnrollTitle,
    EnrollPrompt,
    EnrollNotice,
    Saving,
    PrivateBadge,
    NoEvents,
    NoPhotos,
}

/// Look up the English copy for `key`
pub fn t(key: Text) -> &'static str {
    match key {
        Text::AppName => "PHOTOROLL",
        Text::UnlockTitle => " Private Event ",
        Text::UnlockPrompt => "Enter the 6-digit PIN to view this roll",
        Text::WrongPin => "Wrong PIN, try again",
        Text::Checking => "Checking...",
        Text::EnrollTitle => " Make Event Private ",
        Text::EnrollPrompt => "Choose a 6-digit PIN for viewers",
        Text::EnrollNotice => "Share the PIN with guests you want to let in",
        Text::Saving => "Saving...",
        Text::PrivateBadge => "PRIVATE",
        Text::NoEvents => "No events yet",
        Text::NoPhotos => "No photos in this roll yet",
    }
}
