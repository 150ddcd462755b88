//! The library facade
//!
//! Owns the registry, the playlist store, the share controller and the one
//! playback session of the process. Hosts keep a single `Library` and route
//! every user action through it.

use soundroom_core::{
    FileSource, LinkSink, MediaFile, PlaylistId, SoundroomError, Track, TrackId, Visibility,
};
use soundroom_playback::{PlaybackConfig, PlaybackEvent, PlaybackSession, PlaybackState};
use std::sync::Arc;

use crate::{
    config::LibraryConfig,
    demo::demo_playlist,
    error::Result,
    registry::TrackRegistry,
    search,
    share::{self, ShareController},
    store::PlaylistStore,
};

#[derive(Debug)]
pub struct Library {
    registry: TrackRegistry,
    playlists: PlaylistStore,
    sharing: ShareController,
    session: PlaybackSession,
}

impl Library {
    /// Create a library, seeded with the demo playlist when configured
    pub fn new(config: LibraryConfig, playback: PlaybackConfig) -> Self {
        let mut playlists = PlaylistStore::new();
        if config.seed_demo {
            let id = playlists.insert(demo_playlist()).id.clone();
            // Just inserted, cannot be missing
            playlists.select_active(&id).ok();
        }

        Self {
            registry: TrackRegistry::new(config.unknown_artist, config.unknown_title),
            playlists,
            sharing: ShareController::new(&config.share),
            session: PlaybackSession::new(playback),
        }
    }

    // ===== Read access =====

    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    // ===== Ingestion =====

    /// Ingest one uploaded file into the unfiled pool
    pub fn ingest(&mut self, file: MediaFile) -> Result<Arc<Track>> {
        Ok(self.registry.ingest(file)?)
    }

    /// Ingest every audio file a source yields, skipping the rest
    pub fn ingest_all<S: FileSource + ?Sized>(&mut self, source: &mut S) -> Vec<Arc<Track>> {
        let ingested = self.registry.ingest_all(source);
        tracing::info!("Ingested {} track(s)", ingested.len());
        ingested
    }

    // ===== Playlists =====

    /// Create a playlist, returning its id
    pub fn create_playlist(&mut self, name: &str) -> Result<PlaylistId> {
        let playlist = self.playlists.create(name).map_err(|e| {
            tracing::debug!("Playlist not created: {}", e);
            e
        })?;
        tracing::info!(playlist = %playlist.id, "Created playlist '{}'", playlist.name);
        Ok(playlist.id.clone())
    }

    pub fn select_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        Ok(self.playlists.select_active(id)?)
    }

    pub fn set_visibility(&mut self, id: &PlaylistId, visibility: Visibility) -> Result<()> {
        self.playlists.set_visibility(id, visibility)?;
        tracing::info!(playlist = %id, "Playlist is now {}", visibility);
        Ok(())
    }

    /// Move the playlist's cursor to `index`
    pub fn set_current_track(&mut self, id: &PlaylistId, index: usize) -> Result<()> {
        Ok(self.playlists.set_current_track(id, index)?)
    }

    /// Put a track into a playlist
    ///
    /// An unfiled track leaves the pool; a track already in some playlist is
    /// shared, so it then appears in both.
    pub fn file_track(&mut self, track_id: &TrackId, playlist_id: &PlaylistId) -> Result<()> {
        self.playlists.require(playlist_id)?;

        let track = match self.registry.take_unfiled(track_id) {
            Some(track) => track,
            None => self
                .playlists
                .find_track(track_id)
                .cloned()
                .ok_or_else(|| SoundroomError::TrackNotFound(track_id.clone()))?,
        };

        self.playlists.add_track(playlist_id, track)?;
        Ok(())
    }

    // ===== Search =====

    /// Every track occurrence whose title or artist contains `query`
    pub fn search(&self, query: &str) -> Vec<Arc<Track>> {
        search::filter(self.registry.unfiled(), &self.playlists, query)
    }

    /// Look a track up in the unfiled pool, then in playlists
    pub fn find_track(&self, id: &TrackId) -> Option<&Arc<Track>> {
        self.registry
            .find(id)
            .or_else(|| self.playlists.find_track(id))
    }

    // ===== Playback =====

    /// Start playing a known track from the beginning
    pub fn play_track(&mut self, id: &TrackId) -> Result<()> {
        let track = self
            .find_track(id)
            .cloned()
            .ok_or_else(|| SoundroomError::TrackNotFound(id.clone()))?;
        self.session.select_track(track);
        Ok(())
    }

    /// Start playing `track` from the beginning
    pub fn select_track(&mut self, track: Arc<Track>) {
        self.session.select_track(track);
    }

    pub fn toggle_play_pause(&mut self) -> Result<PlaybackState> {
        Ok(self.session.toggle_play_pause()?)
    }

    /// Set volume, returning the clamped level applied
    pub fn set_volume(&mut self, level: i32) -> u8 {
        self.session.set_volume(level)
    }

    pub fn seek_to_percent(&mut self, percent: f64) -> Result<f64> {
        Ok(self.session.seek_to_percent(percent)?)
    }

    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.session.drain_events()
    }

    // ===== Sharing =====

    /// Deliver the playlist's share locator to `sink`
    pub fn share<S: LinkSink + ?Sized>(&self, id: &PlaylistId, sink: &mut S) -> Result<String> {
        self.sharing.share(&self.playlists, id, sink).map_err(|e| {
            tracing::debug!("Share rejected: {}", e);
            e.into()
        })
    }

    /// One-shot copy of a public playlist's current track into the session
    pub fn join(&mut self, id: &PlaylistId) -> Result<Arc<Track>> {
        self.sharing
            .join(&mut self.playlists, &mut self.session, id)
            .map_err(|e| {
                tracing::debug!("Join rejected: {}", e);
                e.into()
            })
    }

    /// Join the playlist a share locator points at
    pub fn join_link(&mut self, locator: &str) -> Result<Arc<Track>> {
        let id = share::parse_locator(locator)?;
        self.join(&id)
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(LibraryConfig::default(), PlaybackConfig::default())
    }
}
