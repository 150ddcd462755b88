//! Core types for the playback session

use serde::{Deserialize, Serialize};

/// Playback state
///
/// Derived from the session's active track and playing flag; never stored
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Idle,

    /// Track loaded, not playing
    Paused,

    /// Currently playing
    Playing,
}

impl PlaybackState {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Paused => "paused",
            Self::Playing => "playing",
        }
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for the playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 75)
    #[serde(default = "default_volume")]
    pub volume: u8,
}

fn default_volume() -> u8 {
    75
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}
