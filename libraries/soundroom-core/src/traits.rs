/// Collaborator traits for Soundroom
///
/// The library never reads files or touches a clipboard itself. Hosts plug
/// their platform's file picker and link sink in through these traits.
use crate::types::MediaFile;

/// File ingestion source
///
/// Supplies zero or more raw files, each with a declared media kind and a
/// name. Implementers decide where the bytes come from (a file picker, a
/// directory, an upload form).
pub trait FileSource {
    /// Take the next file, or `None` once the source is exhausted
    fn next_file(&mut self) -> Option<MediaFile>;
}

impl FileSource for std::vec::IntoIter<MediaFile> {
    fn next_file(&mut self) -> Option<MediaFile> {
        self.next()
    }
}

/// Clipboard/link sink
///
/// Receives a generated share locator. The core never observes a result.
pub trait LinkSink {
    /// Deliver a locator
    fn deliver(&mut self, locator: &str);
}

impl<S: LinkSink + ?Sized> LinkSink for &mut S {
    fn deliver(&mut self, locator: &str) {
        (**self).deliver(locator);
    }
}
