//! Plain-folder listing.
//!
//! The folder path is an ordinary enumerate-and-sort: no binary parsing,
//! same [`Entry`] model and ordering as the archive path. One policy
//! difference is deliberate: folder listings skip hidden entries
//! (dot-files), archive listings never filter.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::error::Result;
use crate::list::{Entry, sort_entries};

/// List a real directory as ordered display entries.
pub fn list_folder(path: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for item in fs::read_dir(path)? {
        let item = item?;
        let name = item.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let metadata = item.metadata()?;
        let is_dir = metadata.is_dir();
        // Stored as a flat root-level path, separator-marked like an
        // archive member, so directory classification stays a pure
        // function of the path
        let stored = if is_dir { format!("{name}/") } else { name };
        let size = if is_dir { 0 } else { metadata.len() };
        let modified = metadata.modified().ok().map(to_local_naive);

        entries.push(Entry::from_path(stored, size, modified));
    }

    sort_entries(&mut entries);
    Ok(entries)
}

fn to_local_naive(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}
