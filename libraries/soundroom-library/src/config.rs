/// Library configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub share: ShareSettings,

    /// Artist shown for uploaded tracks
    #[serde(default = "default_unknown_artist")]
    pub unknown_artist: String,

    /// Title used when a file name yields nothing usable
    #[serde(default = "default_unknown_title")]
    pub unknown_title: String,

    /// Start with the predefined public playlist
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShareSettings {
    /// Origin prefixed to every share locator
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Refuse to share private playlists
    #[serde(default)]
    pub require_public: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            share: ShareSettings::default(),
            unknown_artist: default_unknown_artist(),
            unknown_title: default_unknown_title(),
            seed_demo: default_seed_demo(),
        }
    }
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            require_public: false,
        }
    }
}

// Default values
pub(crate) fn default_unknown_artist() -> String {
    "Unknown artist".to_string()
}

pub(crate) fn default_unknown_title() -> String {
    "Untitled".to_string()
}

fn default_seed_demo() -> bool {
    true
}

fn default_origin() -> String {
    "http://localhost:8080".to_string()
}
