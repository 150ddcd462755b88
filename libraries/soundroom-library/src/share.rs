//! Sharing and joining playlists
//!
//! A share locator has the form `<origin>/playlist/<playlist-id>`. The path
//! segment and the id are the only parts Soundroom controls, and consumers
//! parse links by them, so both must stay stable.
//!
//! Joining is a one-shot copy of a public playlist's current track into the
//! playback session. Nothing is synchronized afterwards.

use soundroom_core::{LinkSink, PlaylistId, Result, SoundroomError, Track};
use soundroom_playback::PlaybackSession;
use std::sync::Arc;

use crate::config::ShareSettings;
use crate::store::PlaylistStore;

/// Fixed path segment preceding the playlist id
pub const PLAYLIST_PATH_SEGMENT: &str = "playlist";

#[derive(Debug, Clone)]
pub struct ShareController {
    // Stored without a trailing slash
    origin: String,
    require_public: bool,
}

impl ShareController {
    pub fn new(settings: &ShareSettings) -> Self {
        Self {
            origin: settings.origin.trim_end_matches('/').to_string(),
            require_public: settings.require_public,
        }
    }

    /// Locator for a playlist id, without any checks
    pub fn locator(&self, id: &PlaylistId) -> String {
        format!("{}/{}/{}", self.origin, PLAYLIST_PATH_SEGMENT, id)
    }

    /// Build the playlist's locator and hand it to `sink`
    ///
    /// Unknown playlists are rejected. Private playlists are shared as well
    /// unless `require_public` is set. The sink is only called on success.
    pub fn share<S: LinkSink + ?Sized>(
        &self,
        store: &PlaylistStore,
        id: &PlaylistId,
        sink: &mut S,
    ) -> Result<String> {
        let playlist = store.require(id)?;
        if self.require_public && !playlist.is_public() {
            return Err(SoundroomError::NotPublic(id.clone()));
        }

        let locator = self.locator(id);
        sink.deliver(&locator);
        tracing::info!(playlist = %id, "Shared playlist: {}", locator);
        Ok(locator)
    }

    /// Copy a public playlist's current track into the session
    ///
    /// Unknown and private playlists are rejected with nothing changed. A
    /// public playlist becomes the selected playlist; if it has no tracks the
    /// join is rejected after that and the session is left alone.
    pub fn join(
        &self,
        store: &mut PlaylistStore,
        session: &mut PlaybackSession,
        id: &PlaylistId,
    ) -> Result<Arc<Track>> {
        let playlist = store.require(id)?;
        if !playlist.is_public() {
            return Err(SoundroomError::NotPublic(id.clone()));
        }
        let current = playlist.current().cloned();

        store.select_active(id)?;

        let track = current.ok_or_else(|| SoundroomError::EmptyPlaylist(id.clone()))?;
        session.select_track(Arc::clone(&track));
        tracing::info!(playlist = %id, track = %track.id, "Joined playlist");
        Ok(track)
    }
}

/// Recover the playlist id from a share locator
///
/// Only the `/playlist/<id>` tail is inspected, so links minted under any
/// origin are accepted.
pub fn parse_locator(locator: &str) -> Result<PlaylistId> {
    let marker = format!("/{}/", PLAYLIST_PATH_SEGMENT);
    let start = locator
        .rfind(&marker)
        .map(|i| i + marker.len())
        .ok_or_else(|| SoundroomError::invalid_locator(locator))?;

    let id = locator[start..].trim_end_matches('/');
    if id.is_empty() || id.contains('/') {
        return Err(SoundroomError::invalid_locator(locator));
    }
    Ok(PlaylistId::new(id))
}

/// Link sink that keeps every delivered locator
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub delivered: Vec<String>,
}

impl MemorySink {
    pub fn last(&self) -> Option<&str> {
        self.delivered.last().map(String::as_str)
    }
}

impl LinkSink for MemorySink {
    fn deliver(&mut self, locator: &str) {
        self.delivered.push(locator.to_string());
    }
}
