use std::fmt;

use serde::{Deserialize, Serialize};

/// Root under which every event folder lives on the media host.
pub const FOLDER_ROOT: &str = "wedding/private";

/// Event used when the caller does not name one.
pub const DEFAULT_EVENT: &str = "Uncategorized";

/// Caller-supplied event identifier selecting an upload folder.
///
/// The value is free-form: it is trimmed, and a missing or blank value
/// falls back to [`DEFAULT_EVENT`]. Distinct callers using the same
/// identifier share a folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct EventId(String);

impl EventId {
    pub fn new(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self(DEFAULT_EVENT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folder path on the media host, e.g. `wedding/private/ceremony`.
    pub fn folder(&self) -> String {
        format!("{FOLDER_ROOT}/{}", self.0)
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self(DEFAULT_EVENT.to_string())
    }
}

impl From<Option<String>> for EventId {
    fn from(raw: Option<String>) -> Self {
        Self::new(raw.as_deref())
    }
}

impl From<&str> for EventId {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw))
    }
}

impl From<EventId> for String {
    fn from(event: EventId) -> Self {
        event.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public identifier for an uploaded file: everything before the first `.`.
///
/// Returns `None` when that prefix is empty, letting the media host pick one.
pub fn public_id_from_filename(filename: &str) -> Option<String> {
    let stem = filename.split('.').next().unwrap_or_default().trim();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
