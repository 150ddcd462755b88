//! Playback Events
//!
//! Event-based communication for UI synchronization.
//! Events are emitted only for accepted transitions:
//! - Track changes (every `select_track`, including re-selecting the same track)
//! - State changes (play/pause)
//! - Volume changes
//! - Seeks

use serde::{Deserialize, Serialize};

use crate::types::PlaybackState;

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A track was selected and restarted from 0%
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
    },

    /// Progress moved by a seek
    Seeked {
        /// New progress percentage (0-100)
        progress: f64,
    },
}
