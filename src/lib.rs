//! # zipls
//!
//! A listing library for folder-preview style display of ZIP archives
//! and directories.
//!
//! Given a ZIP file, this library reads the archive's central directory
//! and produces a flat, display-ready list of entries: directories first,
//! then files, each group in case-insensitive natural name order
//! ("File2" before "File10"). Only listing-level metadata is read; member
//! payloads are never decompressed.
//!
//! ## Features
//!
//! - ZIP central directory parsing, including ZIP64 archives
//! - Listing from local files or in-memory byte slices
//! - Directory-first, natural-ordered, stable sorting
//! - Plain-folder listing with the same ordering (hidden files skipped)
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), zipls::ListError> {
//!     // Works on a folder or a ZIP archive alike
//!     let entries = zipls::list_path(Path::new("photos.zip"))?;
//!     for entry in &entries {
//!         println!("{} ({} bytes)", entry.name, entry.size);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod folder;
pub mod io;
pub mod list;
pub mod zip;

pub use cli::Cli;
pub use error::ListError;
pub use folder::list_folder;
pub use io::{LocalFileReader, ReadAt, SliceReader};
pub use list::{Entry, list_archive, list_archive_bytes, list_path, sort_entries};
pub use zip::{RawEntry, ZipReader};
