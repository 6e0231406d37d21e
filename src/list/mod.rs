//! Entry listing and ordering.
//!
//! Turns raw archive member records into display-ready [`Entry`] values
//! and applies the preview sort: directories first, then files, each
//! group in case-insensitive natural name order. One listing call is
//! synchronous, owns its container handle, and returns either the full
//! ordered sequence or an error, never a partial view.

mod entry;
mod natural;

pub use entry::Entry;
pub use natural::natural_cmp;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::folder;
use crate::zip::ZipReader;

/// List a ZIP container on the filesystem as ordered display entries.
pub fn list_archive(path: &Path) -> Result<Vec<Entry>> {
    let reader = ZipReader::open(path)?;
    let raw = reader.entries()?;
    let mut entries: Vec<Entry> = raw.into_iter().map(Entry::from).collect();
    sort_entries(&mut entries);
    Ok(entries)
}

/// List a ZIP container already held in memory.
pub fn list_archive_bytes(data: &[u8]) -> Result<Vec<Entry>> {
    let raw = ZipReader::from_bytes(data).entries()?;
    let mut entries: Vec<Entry> = raw.into_iter().map(Entry::from).collect();
    sort_entries(&mut entries);
    Ok(entries)
}

/// List a path, dispatching between the folder and the archive path.
pub fn list_path(path: &Path) -> Result<Vec<Entry>> {
    if fs::metadata(path)?.is_dir() {
        folder::list_folder(path)
    } else {
        list_archive(path)
    }
}

/// Order entries for display.
///
/// A single composite comparator under a stable sort: directories before
/// files, then case-insensitive natural name order, then a plain
/// comparison so names differing only in case order deterministically.
/// Byte-identical names keep their input order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| natural_cmp(&a.name, &b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
}
