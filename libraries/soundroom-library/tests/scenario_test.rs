//! End-to-end scenarios for the library
//!
//! Each test drives a `Library` the way a host UI would: uploads, playlist
//! management, search, playback, sharing and joining.

use bytes::Bytes;
use soundroom_core::{MediaFile, PlaylistId, SoundroomError, Visibility};
use soundroom_library::{Library, LibraryConfig, LibraryError, MemorySink, ShareSettings};
use soundroom_playback::{PlaybackConfig, PlaybackEvent, PlaybackState};
use std::sync::Arc;

// ===== Test Helpers =====

const ORIGIN: &str = "https://soundroom.example";

fn library() -> Library {
    let config = LibraryConfig {
        share: ShareSettings {
            origin: ORIGIN.to_string(),
            require_public: false,
        },
        seed_demo: false,
        ..LibraryConfig::default()
    };
    Library::new(config, PlaybackConfig::default())
}

fn audio(name: &str) -> MediaFile {
    MediaFile::new(name, "audio/mpeg", Bytes::from(name.as_bytes().to_vec()))
}

fn session_snapshot(library: &Library) -> (PlaybackState, Option<String>, f64, u8) {
    let session = library.session();
    (
        session.get_state(),
        session.get_current_track().map(|t| t.id.to_string()),
        session.get_progress(),
        session.get_volume(),
    )
}

// ===== Scenarios =====

#[test]
fn joining_a_fresh_empty_playlist_leaves_session_unchanged() {
    let mut library = library();
    let id = library.create_playlist("Test").unwrap();
    let before = session_snapshot(&library);

    // Private by default
    assert!(library.join(&id).is_err());
    assert_eq!(session_snapshot(&library), before);

    // Even once public, an empty sequence cannot be joined
    library.set_visibility(&id, Visibility::Public).unwrap();
    assert_eq!(
        library.join(&id),
        Err(LibraryError::Rejected(SoundroomError::EmptyPlaylist(id.clone())))
    );
    assert_eq!(session_snapshot(&library), before);
}

#[test]
fn uploaded_song_is_searchable_by_title() {
    let mut library = library();
    let track = library.ingest(audio("song.mp3")).unwrap();

    assert_eq!(track.title, "song");
    assert_eq!(track.duration_secs, 0);

    let found = library.search("song");
    assert_eq!(found.len(), 1);
    assert!(Arc::ptr_eq(&found[0], &track));
}

#[test]
fn sharing_a_public_playlist_yields_origin_path_and_id() {
    let mut library = library();
    let id = library.create_playlist("Party").unwrap();
    library.set_visibility(&id, Visibility::Public).unwrap();

    let mut sink = MemorySink::default();
    let locator = library.share(&id, &mut sink).unwrap();

    assert_eq!(locator, format!("{}/playlist/{}", ORIGIN, id));
    assert_eq!(sink.delivered, vec![locator]);
}

#[test]
fn rejected_uploads_are_silently_dropped() {
    let mut library = library();
    let mut source = vec![
        audio("keep.ogg"),
        MediaFile::new("cover.png", "image/png", Bytes::new()),
        MediaFile::new("clip.mp4", "video/mp4", Bytes::new()),
    ]
    .into_iter();

    let ingested = library.ingest_all(&mut source);

    assert_eq!(ingested.len(), 1);
    assert_eq!(library.registry().len(), 1);
    assert_eq!(library.search("").len(), 1);
}

#[test]
fn join_mirrors_the_playlist_cursor_once() {
    let mut library = library();
    let id = library.create_playlist("Radio").unwrap();
    library.set_visibility(&id, Visibility::Public).unwrap();
    for name in ["intro.mp3", "main.mp3", "outro.mp3"] {
        let track = library.ingest(audio(name)).unwrap();
        library.file_track(&track.id, &id).unwrap();
    }
    library.set_current_track(&id, 1).unwrap();

    let joined = library.join(&id).unwrap();
    assert_eq!(joined.title, "main");
    assert_eq!(library.session().get_state(), PlaybackState::Playing);
    assert_eq!(library.session().get_progress(), 0.0);

    // Moving the cursor afterwards does not follow into the session
    library.set_current_track(&id, 2).unwrap();
    assert_eq!(library.session().get_current_track().unwrap().title, "main");
}

#[test]
fn full_listening_session() {
    let mut library = Library::default();
    let demo_id = library.playlists().selected().unwrap().id.clone();

    // Upload and file two tracks into a new playlist
    let mut source = vec![audio("first.mp3"), audio("second.flac")].into_iter();
    let uploaded = library.ingest_all(&mut source);
    let mine = library.create_playlist("  Mine ").unwrap();
    for track in &uploaded {
        library.file_track(&track.id, &mine).unwrap();
    }
    assert!(library.registry().is_empty());
    assert_eq!(library.playlists().get(&mine).unwrap().name, "Mine");

    // Everything reachable: 3 demo tracks followed by the 2 uploads
    let titles: Vec<_> = library
        .search("")
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(
        titles,
        vec!["Cosmic Odyssey", "Galactic Melody", "Orbital Symphony", "first", "second"]
    );

    // Play, pause, adjust
    library.play_track(&uploaded[1].id).unwrap();
    assert_eq!(library.toggle_play_pause(), Ok(PlaybackState::Paused));
    assert_eq!(library.set_volume(140), 100);
    assert_eq!(library.session().get_state(), PlaybackState::Paused);

    // Join the public demo playlist: overrides the paused upload
    let joined = library.join(&demo_id).unwrap();
    assert_eq!(joined.title, "Cosmic Odyssey");
    assert_eq!(library.session().get_state(), PlaybackState::Playing);
    assert_eq!(library.playlists().selected().unwrap().id, demo_id);

    let events = library.drain_events();
    assert!(events.contains(&PlaybackEvent::VolumeChanged { level: 100 }));
    assert!(matches!(
        events.last(),
        Some(PlaybackEvent::StateChanged {
            state: PlaybackState::Playing
        })
    ));
}

#[test]
fn strict_sharing_refuses_private_playlists() {
    let config = LibraryConfig {
        share: ShareSettings {
            origin: ORIGIN.to_string(),
            require_public: true,
        },
        seed_demo: false,
        ..LibraryConfig::default()
    };
    let mut library = Library::new(config, PlaybackConfig::default());
    let id = library.create_playlist("Diary").unwrap();

    let mut sink = MemorySink::default();
    assert_eq!(
        library.share(&id, &mut sink),
        Err(LibraryError::Rejected(SoundroomError::NotPublic(id.clone())))
    );
    assert!(sink.delivered.is_empty());

    library.set_visibility(&id, Visibility::Public).unwrap();
    assert!(library.share(&id, &mut sink).is_ok());
}

#[test]
fn rejected_operations_emit_no_events() {
    let mut library = library();
    library.toggle_play_pause().ok();
    library.seek_to_percent(50.0).ok();
    library.join(&PlaylistId::new("ghost")).ok();
    library.join_link("https://x/playlist/ghost").ok();
    library.create_playlist("   ").ok();

    assert!(library.drain_events().is_empty());
}
