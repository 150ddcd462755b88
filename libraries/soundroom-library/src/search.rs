//! Catalog search
//!
//! Results are occurrences, not distinct tracks: a track filed in two
//! playlists is reported twice.

use soundroom_core::Track;
use std::sync::Arc;

use crate::store::PlaylistStore;

/// Tracks whose title or artist contains `query`, ignoring case
///
/// Searches the unfiled pool first, then every playlist in store order, each
/// in playlist order. An empty query matches everything.
pub fn filter(unfiled: &[Arc<Track>], playlists: &PlaylistStore, query: &str) -> Vec<Arc<Track>> {
    let needle = query.to_lowercase();

    unfiled
        .iter()
        .chain(playlists.iter().flat_map(|p| p.tracks()))
        .filter(|track| track.matches_lowercase(&needle))
        .cloned()
        .collect()
}
