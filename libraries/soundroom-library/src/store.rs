//! Playlist store
//!
//! Playlists are kept in creation order, which is the only listing order.
//! The store also carries the "currently viewed" playlist pointer that join
//! and the host's play buttons act on.

use soundroom_core::{Playlist, PlaylistId, Result, SoundroomError, Track, TrackId, Visibility};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
    selected: Option<PlaylistId>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty private playlist named `name` (trimmed)
    ///
    /// Rejects empty and whitespace-only names.
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SoundroomError::EmptyName);
        }

        Ok(self.insert(Playlist::new(name)))
    }

    /// Append an already built playlist
    ///
    /// Skips the name check, so only the crate's own seeding uses it.
    pub(crate) fn insert(&mut self, playlist: Playlist) -> &Playlist {
        self.playlists.push(playlist);
        &self.playlists[self.playlists.len() - 1]
    }

    /// Point the "currently viewed" selection at `id`
    ///
    /// An unknown id is rejected and the previous selection kept.
    pub fn select_active(&mut self, id: &PlaylistId) -> Result<()> {
        self.require(id)?;
        self.selected = Some(id.clone());
        Ok(())
    }

    /// The currently viewed playlist
    pub fn selected(&self) -> Option<&Playlist> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Like [`get`](Self::get), but rejects unknown ids
    pub fn require(&self, id: &PlaylistId) -> Result<&Playlist> {
        self.get(id)
            .ok_or_else(|| SoundroomError::PlaylistNotFound(id.clone()))
    }

    fn require_mut(&mut self, id: &PlaylistId) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| SoundroomError::PlaylistNotFound(id.clone()))
    }

    /// Playlists in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter()
    }

    /// Public playlists in creation order
    pub fn public_playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter().filter(|p| p.is_public())
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn set_visibility(&mut self, id: &PlaylistId, visibility: Visibility) -> Result<()> {
        self.require_mut(id)?.visibility = visibility;
        Ok(())
    }

    /// Append a track reference to a playlist
    pub fn add_track(&mut self, id: &PlaylistId, track: Arc<Track>) -> Result<()> {
        self.require_mut(id)?.push(track);
        Ok(())
    }

    /// Move a playlist's cursor
    pub fn set_current_track(&mut self, id: &PlaylistId, index: usize) -> Result<()> {
        self.require_mut(id)?.set_current(index)
    }

    /// First occurrence of a track in any playlist
    pub fn find_track(&self, id: &TrackId) -> Option<&Arc<Track>> {
        self.playlists
            .iter()
            .flat_map(|p| p.tracks())
            .find(|t| &t.id == id)
    }
}
