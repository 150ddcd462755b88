//! Predefined catalog a fresh library starts with

use soundroom_core::{Playlist, Track, Visibility};
use std::sync::Arc;

const DEMO_PLAYLIST_NAME: &str = "My playlist";

const DEMO_TRACKS: [(&str, &str, u32); 3] = [
    ("Cosmic Odyssey", "Star Path", 240),
    ("Galactic Melody", "Interstellar", 180),
    ("Orbital Symphony", "Planetarium", 320),
];

/// A public playlist of three predefined tracks, cursor on the first
pub fn demo_playlist() -> Playlist {
    let mut playlist = Playlist::new(DEMO_PLAYLIST_NAME);
    playlist.visibility = Visibility::Public;
    for (title, artist, duration_secs) in DEMO_TRACKS {
        playlist.push(Arc::new(Track::new(title, artist, duration_secs)));
    }
    playlist
}
