//! Soundroom Core
//!
//! Core types, collaborator traits, and error handling for Soundroom.
//!
//! This crate provides the building blocks shared by the playback session,
//! the library (registry, playlists, search, sharing) and the applications
//! hosting them.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `MediaFile`, etc.
//! - **Collaborator Traits**: `FileSource`, `LinkSink`
//! - **Error Handling**: `SoundroomError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use soundroom_core::types::{Playlist, Track, Visibility};
//! use std::sync::Arc;
//!
//! let track = Arc::new(Track::new("Orbital Symphony", "Planetarium", 320));
//!
//! let mut playlist = Playlist::new("Night drive");
//! playlist.push(track);
//! playlist.visibility = Visibility::Public;
//!
//! assert_eq!(playlist.current().map(|t| t.title.as_str()), Some("Orbital Symphony"));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SoundroomError};
pub use traits::{FileSource, LinkSink};

pub use types::{
    ContentHandle, MediaFile, Playlist, PlaylistId, Track, TrackId, Visibility,
};
