//! Event roll persistence
//!
//! Events live in a single JSON document. The event PIN is stored in plain
//! text alongside the event, which is the contract the PIN verifier expects:
//! it is handed the stored string and compares entries against it verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use photoroll_pin::{Pin, PinError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

/// Current on-disk format version
const STORE_VERSION: u32 = 1;

/// Store file name under the data directory
const STORE_FILE_NAME: &str = "events.json";

/// A shared photo collection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub name: String,
    /// User name of the organizer
    pub organizer: String,
    pub created_at: DateTime<Utc>,
    /// Viewers must enter the PIN before the roll is shown
    #[serde(default)]
    pub private: bool,
    /// Access PIN, present only while the event is private
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Photo file names in the shared roll
    #[serde(default)]
    pub photos: Vec<String>,
}

impl EventRecord {
    pub fn is_organizer(&self, user: &str) -> bool {
        self.organizer == user
    }
}

/// On-disk document
#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    events: Vec<EventRecord>,
}

/// Event store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown event {0}")]
    UnknownEvent(Uuid),

    #[error("Only the organizer ({organizer}) can change privacy of this event")]
    NotOrganizer { organizer: String },

    #[error("Event {0} is private but has no PIN")]
    MissingPin(Uuid),

    #[error("Stored PIN is invalid: {0}")]
    InvalidPin(#[from] PinError),

    #[error("Unsupported store version {0}")]
    UnsupportedVersion(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-backed collection of events
pub struct EventStore {
    path: PathBuf,
    events: Vec<EventRecord>,
}

impl EventStore {
    /// Default store location under the user's data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("photoroll")
            .join(STORE_FILE_NAME)
    }

    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let events = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&contents)?;
            if file.version > STORE_VERSION {
                return Err(StoreError::UnsupportedVersion(file.version));
            }
            file.events
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), count = events.len(), "Opened event store");
        Ok(Self { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Create a public event organized by `organizer`
    pub fn create_event(
        &mut self,
        name: impl Into<String>,
        organizer: impl Into<String>,
    ) -> Result<Uuid, StoreError> {
        let event = EventRecord {
            id: Uuid::new_v4(),
            name: name.into(),
            organizer: organizer.into(),
            created_at: Utc::now(),
            private: false,
            pin: None,
            photos: Vec::new(),
        };
        let id = event.id;
        self.events.push(event);
        self.save()?;
        Ok(id)
    }

    /// Append a photo file name to an event's roll
    pub fn add_photo(&mut self, id: Uuid, file_name: impl Into<String>) -> Result<(), StoreError> {
        self.get_mut(id)?.photos.push(file_name.into());
        self.save()
    }

    /// Mark an event private with a newly enrolled PIN
    pub fn enable_privacy(&mut self, id: Uuid, requester: &str, pin: &Pin) -> Result<(), StoreError> {
        let event = self.get_mut(id)?;
        Self::check_organizer(event, requester)?;

        event.pin = Some(pin.as_str().to_string());
        event.private = true;
        self.save()?;

        tracing::info!(event = %id, "Event marked private");
        Ok(())
    }

    /// Make an event public again and drop its PIN
    pub fn disable_privacy(&mut self, id: Uuid, requester: &str) -> Result<(), StoreError> {
        let event = self.get_mut(id)?;
        Self::check_organizer(event, requester)?;

        event.private = false;
        event.pin = None;
        self.save()?;

        tracing::info!(event = %id, "Event made public");
        Ok(())
    }

    /// The PIN a viewer must enter, or `None` for a public event
    pub fn access_pin(&self, id: Uuid) -> Result<Option<Zeroizing<String>>, StoreError> {
        let event = self.get(id).ok_or(StoreError::UnknownEvent(id))?;
        if !event.private {
            return Ok(None);
        }

        let pin = event.pin.as_deref().ok_or(StoreError::MissingPin(id))?;
        // Reject a corrupted value here so the verifier is never mounted with it
        Pin::parse(pin)?;
        Ok(Some(Zeroizing::new(pin.to_string())))
    }

    /// Populate a few sample events for a first run
    pub fn seed_demo(&mut self, organizer: &str) -> Result<(), StoreError> {
        let picnic = self.create_event("Summer Picnic", organizer)?;
        for photo in ["blanket.jpg", "lemonade.jpg", "frisbee.jpg"] {
            self.add_photo(picnic, photo)?;
        }

        let wedding = self.create_event("Ana & Leo's Wedding", "ana")?;
        for photo in ["vows.jpg", "first-dance.jpg"] {
            self.add_photo(wedding, photo)?;
        }
        // Seeded directly since the seeding user is not the organizer
        if let Some(event) = self.events.iter_mut().find(|e| e.id == wedding) {
            event.private = true;
            event.pin = Some("135790".to_string());
        }

        self.create_event("Team Offsite", organizer)?;
        self.save()
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut EventRecord, StoreError> {
        self.events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::UnknownEvent(id))
    }

    fn check_organizer(event: &EventRecord, requester: &str) -> Result<(), StoreError> {
        if event.is_organizer(requester) {
            Ok(())
        } else {
            Err(StoreError::NotOrganizer {
                organizer: event.organizer.clone(),
            })
        }
    }

    /// Write the whole document atomically
    fn save(&self) -> Result<(), StoreError> {
        let file = StoreFile {
            version: STORE_VERSION,
            events: self.events.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &contents)?;
        fs::rename(&temp_path, &self.path)?;

        // The file holds plain-text PINs
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}
