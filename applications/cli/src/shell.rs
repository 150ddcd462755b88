//! Line-oriented command shell
//!
//! Each input line is one user action. Rejected library operations are
//! silent on stdout and logged at debug level; only malformed commands get
//! a message.

use anyhow::{anyhow, bail, Context, Result};
use soundroom_core::{LinkSink, PlaylistId, TrackId, Visibility};
use soundroom_library::Library;
use soundroom_playback::format_time;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::source::DirectorySource;

const HELP: &str = "\
commands:
  upload <path>..            ingest audio files (directories expand one level)
  create <name>              create a private playlist
  playlists                  list playlists
  select <playlist>          view a playlist
  file <track> <playlist>    put a track into a playlist
  public|private <playlist>  change visibility
  cue <playlist> <index>     move a playlist's current track
  search [query]             search titles and artists
  play <track>               play a track from the start
  toggle                     play/pause
  volume <0-100>             set volume
  seek <0-100>               move progress
  share <playlist>           print a share link
  join <playlist|link>       play a public playlist's current track
  status                     show the player
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Upload(Vec<PathBuf>),
    Create(String),
    Playlists,
    Select(PlaylistId),
    File(TrackId, PlaylistId),
    Visibility(PlaylistId, Visibility),
    Cue(PlaylistId, usize),
    Search(String),
    Play(TrackId),
    Toggle,
    Volume(i32),
    Seek(f64),
    Share(PlaylistId),
    Join(String),
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `None` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        let mut args = rest.split_whitespace();

        let command = match word {
            "upload" => {
                let paths: Vec<PathBuf> = args.map(PathBuf::from).collect();
                if paths.is_empty() {
                    bail!("usage: upload <path>..");
                }
                Self::Upload(paths)
            }
            // Names keep their inner spacing; the store trims the ends
            "create" => Self::Create(rest.to_string()),
            "playlists" => Self::Playlists,
            "select" => Self::Select(playlist_arg(args.next())?),
            "file" => {
                let track = TrackId::new(required(args.next(), "track")?);
                Self::File(track, playlist_arg(args.next())?)
            }
            "public" => Self::Visibility(playlist_arg(args.next())?, Visibility::Public),
            "private" => Self::Visibility(playlist_arg(args.next())?, Visibility::Private),
            "cue" => {
                let playlist = playlist_arg(args.next())?;
                let index = required(args.next(), "index")?
                    .parse()
                    .context("index must be a non-negative integer")?;
                Self::Cue(playlist, index)
            }
            "search" => Self::Search(rest.to_string()),
            "play" => Self::Play(TrackId::new(required(args.next(), "track")?)),
            "toggle" => Self::Toggle,
            "volume" => Self::Volume(
                required(args.next(), "level")?
                    .parse()
                    .context("volume must be an integer")?,
            ),
            "seek" => Self::Seek(
                required(args.next(), "percent")?
                    .parse()
                    .context("seek takes a percentage")?,
            ),
            "share" => Self::Share(playlist_arg(args.next())?),
            "join" => Self::Join(required(args.next(), "playlist")?.to_string()),
            "status" => Self::Status,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{}', try 'help'", other),
        };
        Ok(Some(command))
    }
}

fn required<'a>(arg: Option<&'a str>, name: &str) -> Result<&'a str> {
    arg.ok_or_else(|| anyhow!("missing <{}>", name))
}

fn playlist_arg(arg: Option<&str>) -> Result<PlaylistId> {
    required(arg, "playlist").map(PlaylistId::new)
}

/// Log a rejected library operation without surfacing it
fn ignore<T>(result: soundroom_library::Result<T>) {
    if let Err(e) = result {
        tracing::debug!("Ignored: {}", e);
    }
}

/// Run one command against the library
///
/// Returns `false` once the user asked to quit.
pub fn execute<W: Write>(
    library: &mut Library,
    command: Command,
    sink: &mut dyn LinkSink,
    out: &mut W,
) -> Result<bool> {
    match command {
        Command::Upload(paths) => {
            let mut source = DirectorySource::new(paths);
            for track in library.ingest_all(&mut source) {
                writeln!(out, "{}  {}", track.id, track.title)?;
            }
        }
        Command::Create(name) => match library.create_playlist(&name) {
            Ok(id) => writeln!(out, "{}", id)?,
            Err(e) => tracing::debug!("Ignored: {}", e),
        },
        Command::Playlists => {
            let selected = library.playlists().selected().map(|p| p.id.clone());
            for playlist in library.playlists().iter() {
                let marker = if Some(&playlist.id) == selected.as_ref() { "*" } else { " " };
                writeln!(
                    out,
                    "{} {}  {} ({}, {} tracks)",
                    marker,
                    playlist.id,
                    playlist.name,
                    playlist.visibility,
                    playlist.len()
                )?;
            }
        }
        Command::Select(id) => {
            ignore(library.select_playlist(&id));
            if let Some(playlist) = library.playlists().selected() {
                for (index, track) in playlist.tracks().iter().enumerate() {
                    let cursor = if index == playlist.current_index() { ">" } else { " " };
                    writeln!(
                        out,
                        "{}{:>3}. {}  {} - {} [{}]",
                        cursor,
                        index + 1,
                        track.id,
                        track.title,
                        track.artist,
                        format_time(track.duration())
                    )?;
                }
            }
        }
        Command::File(track, playlist) => ignore(library.file_track(&track, &playlist)),
        Command::Visibility(id, visibility) => ignore(library.set_visibility(&id, visibility)),
        Command::Cue(id, index) => ignore(library.set_current_track(&id, index)),
        Command::Search(query) => {
            for track in library.search(&query) {
                writeln!(out, "{}  {} - {}", track.id, track.title, track.artist)?;
            }
        }
        Command::Play(id) => ignore(library.play_track(&id)),
        Command::Toggle => ignore(library.toggle_play_pause()),
        Command::Volume(level) => {
            let applied = library.set_volume(level);
            writeln!(out, "volume {}", applied)?;
        }
        Command::Seek(percent) => ignore(library.seek_to_percent(percent)),
        Command::Share(id) => ignore(library.share(&id, sink)),
        Command::Join(target) => {
            let result = if target.contains('/') {
                library.join_link(&target)
            } else {
                library.join(&PlaylistId::new(target))
            };
            ignore(result);
        }
        Command::Status => write_status(library, out)?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }

    for event in library.drain_events() {
        tracing::debug!(?event, "Playback event");
    }
    Ok(true)
}

fn write_status<W: Write>(library: &Library, out: &mut W) -> Result<()> {
    let session = library.session();
    match session.get_current_track() {
        Some(track) => writeln!(
            out,
            "{}: {} - {}  {} / {} ({:.0}%)  volume {}",
            session.get_state(),
            track.title,
            track.artist,
            format_time(session.get_elapsed()),
            format_time(track.duration()),
            session.get_progress(),
            session.get_volume()
        )?,
        None => writeln!(out, "{}  volume {}", session.get_state(), session.get_volume())?,
    }
    Ok(())
}

/// Read commands until end of input or `quit`
pub fn run<R: BufRead, W: Write>(
    library: &mut Library,
    input: R,
    sink: &mut dyn LinkSink,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match Command::parse(&line) {
            Ok(Some(command)) => {
                if !execute(library, command, sink, out)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => writeln!(out, "error: {:#}", e)?,
        }
        out.flush()?;
    }
    Ok(())
}
