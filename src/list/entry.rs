use chrono::NaiveDateTime;

use crate::zip::RawEntry;

/// One display-ready item of a container listing.
///
/// Immutable value object, rebuilt from the container index on every
/// listing call; it has no identity beyond its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Last path component, without any trailing separator
    pub name: String,
    /// Full path as stored in the container, trailing '/' for directories
    pub path: String,
    /// Whether the path denotes a directory
    pub is_directory: bool,
    /// Uncompressed size in bytes
    pub size: u64,
    /// Modification time, when the container records one
    pub modified: Option<NaiveDateTime>,
}

impl Entry {
    /// Build an entry from a stored path.
    ///
    /// The directory flag is derived from the trailing separator alone.
    /// The display name strips exactly one trailing separator, then takes
    /// everything after the last remaining one.
    pub fn from_path(path: String, size: u64, modified: Option<NaiveDateTime>) -> Self {
        let is_directory = path.ends_with('/');
        let trimmed = path.strip_suffix('/').unwrap_or(&path);
        let name = match trimmed.rsplit_once('/') {
            Some((_, last)) => last.to_string(),
            None => trimmed.to_string(),
        };
        Self {
            name,
            path,
            is_directory,
            size,
            modified,
        }
    }

    /// Lowercase extension of a file name, the caller's icon hint.
    ///
    /// Directories, dot-less names and bare dot-files have none.
    pub fn extension(&self) -> Option<String> {
        if self.is_directory {
            return None;
        }
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let modified = raw.modified();
        Self::from_path(raw.path, raw.size, modified)
    }
}
