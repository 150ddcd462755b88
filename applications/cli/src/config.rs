/// Application configuration
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use soundroom_library::LibraryConfig;
use soundroom_playback::PlaybackConfig;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "soundroom.toml";
const ENV_PREFIX: &str = "SOUNDROOM";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `soundroom.toml` is only
    /// read when present. Environment variables override the file, e.g.
    /// `SOUNDROOM_LIBRARY__SHARE__ORIGIN=https://music.example`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) if !path.exists() => {
                bail!("Config file not found: {}", path.display());
            }
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with SOUNDROOM_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build().context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }
}
