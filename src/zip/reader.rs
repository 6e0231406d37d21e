use std::path::Path;

use crate::error::{ListError, Result};
use crate::io::{LocalFileReader, ReadAt, SliceReader};

use super::parser::ZipParser;
use super::structures::RawEntry;

/// High-level archive reader.
///
/// Owns the container handle for the duration of one listing call;
/// dropping the reader releases it, on success and failure paths alike.
pub struct ZipReader<R: ReadAt> {
    parser: ZipParser<R>,
}

impl ZipReader<LocalFileReader> {
    /// Open a ZIP container on the local filesystem
    pub fn open(path: &Path) -> Result<Self> {
        let reader = LocalFileReader::new(path).map_err(|e| ListError::ArchiveOpen {
            reason: e.to_string(),
        })?;
        Ok(Self::new(reader))
    }
}

impl<'a> ZipReader<SliceReader<'a>> {
    /// Read a ZIP container already held in memory
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(SliceReader::new(data))
    }
}

impl<R: ReadAt> ZipReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all member records, in the order the archive index stores them
    pub fn entries(&self) -> Result<Vec<RawEntry>> {
        self.parser.entries()
    }
}
