//! Library error types

use soundroom_core::SoundroomError;
use soundroom_playback::PlaybackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LibraryError>;

/// Rejection raised by a [`Library`](crate::Library) operation
///
/// State is unchanged whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error(transparent)]
    Rejected(#[from] SoundroomError),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}
