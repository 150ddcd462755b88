//! Playlist types

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ids::PlaylistId;
use super::track::Track;
use crate::error::{Result, SoundroomError};

/// Playlist visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named, ordered collection of track references
///
/// `current_track` always indexes into `tracks` while `tracks` is non-empty.
/// It is the playlist's own cursor and need not match whatever the playback
/// session is playing.
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub visibility: Visibility,

    /// Local playing flag, independent of the playback session
    pub playing: bool,

    tracks: Vec<Arc<Track>>,
    current_track: usize,
}

impl Playlist {
    /// Create an empty private playlist
    ///
    /// The name is taken as given; validation belongs to the store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            visibility: Visibility::Private,
            playing: false,
            tracks: Vec::new(),
            current_track: 0,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Tracks in playlist order
    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Append a track reference
    pub fn push(&mut self, track: Arc<Track>) {
        self.tracks.push(track);
    }

    /// Index of the playlist's current track
    pub fn current_index(&self) -> usize {
        self.current_track
    }

    /// The playlist's current track, `None` when empty
    pub fn current(&self) -> Option<&Arc<Track>> {
        self.tracks.get(self.current_track)
    }

    /// Move the playlist cursor
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(SoundroomError::TrackIndexOutOfBounds {
                index,
                len: self.tracks.len(),
            });
        }
        self.current_track = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str) -> Arc<Track> {
        Arc::new(Track::new(title, "Artist", 100))
    }

    #[test]
    fn new_playlist_is_private_and_empty() {
        let playlist = Playlist::new("Test");
        assert_eq!(playlist.visibility, Visibility::Private);
        assert!(playlist.is_empty());
        assert_eq!(playlist.current_index(), 0);
        assert!(playlist.current().is_none());
        assert!(!playlist.playing);
    }

    #[test]
    fn order_is_preserved_and_duplicates_allowed() {
        let a = track("a");
        let mut playlist = Playlist::new("Test");
        playlist.push(Arc::clone(&a));
        playlist.push(track("b"));
        playlist.push(Arc::clone(&a));

        let titles: Vec<_> = playlist.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "a"]);
        assert!(Arc::ptr_eq(&playlist.tracks()[0], &playlist.tracks()[2]));
    }

    #[test]
    fn set_current_rejects_out_of_range() {
        let mut playlist = Playlist::new("Test");
        assert_eq!(
            playlist.set_current(0),
            Err(SoundroomError::TrackIndexOutOfBounds { index: 0, len: 0 })
        );

        playlist.push(track("a"));
        playlist.push(track("b"));
        playlist.set_current(1).unwrap();
        assert_eq!(playlist.current().unwrap().title, "b");

        assert!(playlist.set_current(2).is_err());
        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn visibility_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), "\"public\"");
        assert_eq!(Visibility::default(), Visibility::Private);
    }
}
