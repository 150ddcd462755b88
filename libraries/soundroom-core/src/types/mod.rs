mod ids;
mod media;
mod playlist;
mod track;

pub use ids::{PlaylistId, TrackId};
pub use media::MediaFile;
pub use playlist::{Playlist, Visibility};
pub use track::{ContentHandle, Track};
