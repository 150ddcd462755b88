//! Soundroom - Playback Session
//!
//! The single active transport of a Soundroom process.
//!
//! This crate provides:
//! - A three-state transport (`Idle`, `Paused`, `Playing`)
//! - Track selection that always restarts playback from 0%
//! - Play/pause toggling
//! - Volume control clamped to 0-100
//! - Seek by percentage and derived elapsed time
//! - An event queue for UI synchronization
//!
//! # Architecture
//!
//! Nothing here decodes or outputs audio. Progress ticking is left to the
//! host's timer; the session only stores what the host reports through
//! [`PlaybackSession::seek_to_percent`].
//!
//! There is exactly one session per process. Hosts own it and pass it by
//! reference; every mutation goes through the methods below.
//!
//! # Example
//!
//! ```rust
//! use soundroom_core::Track;
//! use soundroom_playback::{PlaybackConfig, PlaybackSession, PlaybackState};
//! use std::sync::Arc;
//!
//! let mut session = PlaybackSession::new(PlaybackConfig::default());
//! assert_eq!(session.get_state(), PlaybackState::Idle);
//!
//! let track = Arc::new(Track::new("Cosmic Odyssey", "Star Path", 240));
//! session.select_track(track);
//! assert_eq!(session.get_state(), PlaybackState::Playing);
//!
//! session.toggle_play_pause().ok();
//! assert_eq!(session.get_state(), PlaybackState::Paused);
//!
//! // Out of range volume is clamped
//! assert_eq!(session.set_volume(250), 100);
//! ```

mod error;
mod events;
mod session;
mod time;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use session::PlaybackSession;
pub use time::format_time;
pub use types::{PlaybackConfig, PlaybackState};
pub use volume::Volume;
