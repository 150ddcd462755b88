//! Raw files handed over by a file source

use bytes::Bytes;

/// Media kinds accepted for ingestion start with this prefix
const AUDIO_KIND_PREFIX: &str = "audio/";

/// A file supplied by a [`FileSource`](crate::FileSource)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// File name as presented by the source (`song.mp3`)
    pub name: String,

    /// Declared media kind (`audio/mpeg`)
    pub kind: String,

    /// Raw contents
    pub content: Bytes,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            content,
        }
    }

    /// Whether the declared media kind indicates audio content
    pub fn is_audio(&self) -> bool {
        self.kind.starts_with(AUDIO_KIND_PREFIX)
    }

    /// File name with its last extension removed
    ///
    /// Only a trailing `.ext` with at least one character, containing no `/`
    /// or `.`, is stripped. Returns `None` when nothing usable remains.
    pub fn title_stem(&self) -> Option<&str> {
        let stem = match self.name.rfind('.') {
            Some(dot) => {
                let ext = &self.name[dot + 1..];
                if ext.is_empty() || ext.contains('/') {
                    self.name.as_str()
                } else {
                    &self.name[..dot]
                }
            }
            None => self.name.as_str(),
        };

        if !stem.is_empty() {
            Some(stem)
        } else if !self.name.is_empty() {
            Some(self.name.as_str())
        } else {
            None
        }
    }
}
