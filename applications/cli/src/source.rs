//! Filesystem file source and stdout link sink

use bytes::Bytes;
use soundroom_core::{FileSource, LinkSink, MediaFile};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Reads files named on the command line
///
/// Directories are expanded one level deep, in name order. The media kind
/// is guessed from the extension; unreadable files are skipped with a
/// warning.
pub struct DirectorySource {
    pending: VecDeque<PathBuf>,
}

impl DirectorySource {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut pending = VecDeque::new();
        for path in paths {
            if path.is_dir() {
                pending.extend(list_dir(&path));
            } else {
                pending.push_back(path);
            }
        }
        Self { pending }
    }
}

fn list_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

fn read_media_file(path: &Path) -> std::io::Result<MediaFile> {
    let content = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let kind = mime_guess::from_path(path).first_or_octet_stream();

    Ok(MediaFile::new(name, kind.essence_str(), Bytes::from(content)))
}

impl FileSource for DirectorySource {
    fn next_file(&mut self) -> Option<MediaFile> {
        while let Some(path) = self.pending.pop_front() {
            match read_media_file(&path) {
                Ok(file) => return Some(file),
                Err(e) => tracing::warn!("Failed to read {:?}: {}", path, e),
            }
        }
        None
    }
}

/// Writes share locators to stdout, standing in for a clipboard
pub struct StdoutSink;

impl LinkSink for StdoutSink {
    fn deliver(&mut self, locator: &str) {
        println!("{}", locator);
    }
}
