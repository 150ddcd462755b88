/// Core error types for Soundroom
///
/// Every variant describes an operation that was rejected without touching
/// any state. Hosts that prefer silent behaviour simply drop the `Err`.
use thiserror::Error;

use crate::types::{PlaylistId, TrackId};

/// Result type alias using `SoundroomError`
pub type Result<T> = std::result::Result<T, SoundroomError>;

/// Core error type for Soundroom
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundroomError {
    /// Ingested file did not declare an audio media kind
    #[error("Not an audio file: {name} ({kind})")]
    NotAudio { name: String, kind: String },

    /// Playlist name was empty or whitespace only
    #[error("Playlist name must not be empty")]
    EmptyName,

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Playlist is private
    #[error("Playlist is not public: {0}")]
    NotPublic(PlaylistId),

    /// Playlist has no tracks
    #[error("Playlist has no tracks: {0}")]
    EmptyPlaylist(PlaylistId),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Index outside of a playlist's track sequence
    #[error("Track index {index} out of bounds for playlist of {len} tracks")]
    TrackIndexOutOfBounds { index: usize, len: usize },

    /// Share locator could not be parsed
    #[error("Invalid share locator: {0}")]
    InvalidLocator(String),
}

impl SoundroomError {
    /// Create a not-audio error
    pub fn not_audio(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::NotAudio {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Create an invalid locator error
    pub fn invalid_locator(locator: impl Into<String>) -> Self {
        Self::InvalidLocator(locator.into())
    }
}
