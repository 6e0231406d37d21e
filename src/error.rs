use thiserror::Error;

/// Errors produced while listing a container.
///
/// A listing call either succeeds with the full entry set or fails with
/// one of these; there is no partial result.
#[derive(Error, Debug)]
pub enum ListError {
    /// The input could not be opened and recognized as a ZIP archive.
    #[error("cannot open archive: {reason}")]
    ArchiveOpen { reason: String },

    /// One record of the archive's central directory could not be parsed.
    ///
    /// The whole listing aborts rather than silently skipping members.
    #[error("unreadable archive index at entry {index}: {reason}")]
    EntryMetadata { index: usize, reason: String },

    /// IO failure outside archive parsing (folder enumeration, stat).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
