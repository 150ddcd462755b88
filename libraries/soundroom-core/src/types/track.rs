/// Track domain type
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ids::TrackId;

/// Audio track
///
/// Tracks are immutable once created. Containers hold them behind `Arc` so a
/// single record can sit in several playlists at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in whole seconds (0 when unknown)
    pub duration_secs: u32,

    /// Transient handle to the uploaded bytes
    #[serde(skip)]
    pub content: Option<ContentHandle>,
}

/// Reference to raw audio bytes plus a playable locator
///
/// Lives only as long as the process; never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHandle {
    /// Raw file contents
    pub bytes: Bytes,

    /// Locator a player can open (`blob:<uuid>`)
    pub locator: String,
}

impl ContentHandle {
    /// Wrap bytes under a fresh `blob:` locator
    pub fn new(bytes: Bytes) -> Self {
        Self {
            bytes,
            locator: format!("blob:{}", uuid::Uuid::new_v4()),
        }
    }

    /// Size of the referenced content in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the referenced content is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Track {
    /// Create a track with a freshly generated id and no content
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            duration_secs,
            content: None,
        }
    }

    /// Attach a content handle
    #[must_use]
    pub fn with_content(mut self, content: ContentHandle) -> Self {
        self.content = Some(content);
        self
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Case-insensitive substring match on title or artist
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracks_get_distinct_ids() {
        let a = Track::new("Same", "Same", 10);
        let b = Track::new("Same", "Same", 10);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn content_handle_uses_blob_locator() {
        let handle = ContentHandle::new(Bytes::from_static(b"ID3"));
        assert!(handle.locator.starts_with("blob:"));
        assert_eq!(handle.len(), 3);

        let track = Track::new("t", "a", 0).with_content(handle.clone());
        assert_eq!(track.content, Some(handle));
    }

    #[test]
    fn matches_title_or_artist_ignoring_case() {
        let track = Track::new("Galactic Melody", "Interstellar", 180);
        assert!(track.matches_lowercase("galactic"));
        assert!(track.matches_lowercase("stell"));
        assert!(track.matches_lowercase(""));
        assert!(!track.matches_lowercase("orbital"));
    }

    #[test]
    fn content_is_not_serialized() {
        let track = Track::new("t", "a", 5).with_content(ContentHandle::new(Bytes::from_static(b"x")));
        let json = serde_json::to_value(&track).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["duration_secs"], 5);
    }
}
