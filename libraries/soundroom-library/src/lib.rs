//! Soundroom - Library
//!
//! Everything a Soundroom host manipulates, behind one owned [`Library`]:
//! - **Track Registry**: ingestion of uploaded files into the unfiled pool
//! - **Playlist Store**: named, ordered playlists with visibility
//! - **Catalog Search**: substring search over every known track occurrence
//! - **Sharing/Join**: share locators and one-shot joins into the session
//! - The process-wide [`PlaybackSession`](soundroom_playback::PlaybackSession)
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use soundroom_core::{MediaFile, Visibility};
//! use soundroom_library::{Library, LibraryConfig, MemorySink};
//! use soundroom_playback::{PlaybackConfig, PlaybackState};
//!
//! let mut config = LibraryConfig::default();
//! config.seed_demo = false;
//! config.share.origin = "https://music.example".to_string();
//! let mut library = Library::new(config, PlaybackConfig::default());
//!
//! let track = library
//!     .ingest(MediaFile::new("song.mp3", "audio/mpeg", Bytes::from_static(b"ID3")))
//!     .unwrap();
//! assert_eq!(track.title, "song");
//!
//! let playlist = library.create_playlist("Road trip").unwrap();
//! library.file_track(&track.id, &playlist).unwrap();
//! library.set_visibility(&playlist, Visibility::Public).unwrap();
//!
//! let mut sink = MemorySink::default();
//! let link = library.share(&playlist, &mut sink).unwrap();
//! assert_eq!(link, format!("https://music.example/playlist/{}", playlist));
//!
//! library.join_link(&link).unwrap();
//! assert_eq!(library.session().get_state(), PlaybackState::Playing);
//! ```

mod config;
mod demo;
mod error;
mod library;
mod registry;
mod search;
mod share;
mod store;

pub use config::{LibraryConfig, ShareSettings};
pub use demo::demo_playlist;
pub use error::{LibraryError, Result};
pub use library::Library;
pub use registry::TrackRegistry;
pub use search::filter;
pub use share::{parse_locator, MemorySink, ShareController, PLAYLIST_PATH_SEGMENT};
pub use store::PlaylistStore;
