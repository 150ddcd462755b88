/// Soundroom - playlist sharing music player
mod config;
mod shell;
mod source;

use anyhow::Context;
use clap::{Parser, Subcommand};
use soundroom_library::Library;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::source::{DirectorySource, StdoutSink};

#[derive(Parser)]
#[command(name = "soundroom")]
#[command(about = "Upload tracks, build playlists and share them", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SOUNDROOM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin (the default)
    Shell {
        /// Audio files or directories to upload before the first prompt
        paths: Vec<PathBuf>,
    },
    /// Print the effective configuration as JSON
    ShowConfig,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean command transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "soundroom_cli=info,soundroom_library=info,soundroom_playback=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Shell { paths: Vec::new() }) {
        Commands::Shell { paths } => run_shell(config, paths)?,
        Commands::ShowConfig => {
            let json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize configuration")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn run_shell(config: AppConfig, paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut library = Library::new(config.library, config.playback);

    if !paths.is_empty() {
        let mut source = DirectorySource::new(paths);
        let added = library.ingest_all(&mut source);
        tracing::info!("Uploaded {} tracks", added.len());
    }

    tracing::info!(
        "Ready with {} playlists, type 'help' for commands",
        library.playlists().len()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run(&mut library, stdin.lock(), &mut StdoutSink, &mut stdout)
}
