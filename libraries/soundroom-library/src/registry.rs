//! Track registry and the unfiled track pool

use soundroom_core::{
    ContentHandle, FileSource, MediaFile, Result, SoundroomError, Track, TrackId,
};
use std::sync::Arc;

use crate::config::{default_unknown_artist, default_unknown_title};

/// Ingests uploaded files and holds tracks not yet filed into a playlist
#[derive(Debug)]
pub struct TrackRegistry {
    // Insertion order is the order search reports them in
    unfiled: Vec<Arc<Track>>,
    unknown_artist: String,
    unknown_title: String,
}

impl TrackRegistry {
    /// Create an empty registry
    ///
    /// Blank placeholders fall back to the built-in defaults, so ingested
    /// tracks never carry an empty title or artist.
    pub fn new(unknown_artist: impl Into<String>, unknown_title: impl Into<String>) -> Self {
        Self {
            unfiled: Vec::new(),
            unknown_artist: non_blank(unknown_artist.into(), default_unknown_artist),
            unknown_title: non_blank(unknown_title.into(), default_unknown_title),
        }
    }

    /// Turn an uploaded file into a track and append it to the unfiled pool
    ///
    /// Files whose declared kind is not audio are rejected and leave the pool
    /// untouched. Accepted tracks get a fresh id, the file name minus its
    /// extension as title, the placeholder artist, and an unknown (zero)
    /// duration.
    pub fn ingest(&mut self, file: MediaFile) -> Result<Arc<Track>> {
        if !file.is_audio() {
            return Err(SoundroomError::not_audio(file.name, file.kind));
        }

        let title = file
            .title_stem()
            .map_or_else(|| self.unknown_title.clone(), str::to_string);

        let track = Arc::new(
            Track::new(title, self.unknown_artist.clone(), 0)
                .with_content(ContentHandle::new(file.content)),
        );

        tracing::debug!(track = %track.id, title = %track.title, "Ingested track");
        self.unfiled.push(Arc::clone(&track));
        Ok(track)
    }

    /// Drain a file source, ingesting every audio file in order
    ///
    /// Non-audio files are skipped.
    pub fn ingest_all<S: FileSource + ?Sized>(&mut self, source: &mut S) -> Vec<Arc<Track>> {
        let mut ingested = Vec::new();
        while let Some(file) = source.next_file() {
            match self.ingest(file) {
                Ok(track) => ingested.push(track),
                Err(e) => tracing::debug!("Skipping upload: {}", e),
            }
        }
        ingested
    }

    /// Unfiled tracks in ingestion order
    pub fn unfiled(&self) -> &[Arc<Track>] {
        &self.unfiled
    }

    pub fn len(&self) -> usize {
        self.unfiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unfiled.is_empty()
    }

    /// Look up an unfiled track
    pub fn find(&self, id: &TrackId) -> Option<&Arc<Track>> {
        self.unfiled.iter().find(|t| &t.id == id)
    }

    /// Remove a track from the unfiled pool, preserving the order of the rest
    pub fn take_unfiled(&mut self, id: &TrackId) -> Option<Arc<Track>> {
        let index = self.unfiled.iter().position(|t| &t.id == id)?;
        Some(self.unfiled.remove(index))
    }
}

fn non_blank(value: String, fallback: fn() -> String) -> String {
    if value.trim().is_empty() {
        tracing::warn!("Blank placeholder configured, using {:?}", fallback());
        fallback()
    } else {
        value
    }
}
