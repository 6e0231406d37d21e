//! Low-level ZIP archive parser.
//!
//! This module handles the binary parsing of ZIP file structures,
//! reading from any source that implements the [`ReadAt`] trait.
//!
//! ## Parsing Strategy
//!
//! ZIP files are designed to be read from the end:
//! 1. Find the End of Central Directory (EOCD) at the file's end
//! 2. If ZIP64, read the ZIP64 EOCD for large archive support
//! 3. Read the Central Directory to get metadata for all members
//!
//! Listing never touches local file headers or member payloads; the
//! central directory alone carries every field a preview needs.
//!
//! ## Failure model
//!
//! Anything that prevents locating or fetching the central directory is
//! an open failure ([`ListError::ArchiveOpen`]). Once the directory is in
//! hand, a record that cannot be parsed fails the whole listing
//! ([`ListError::EntryMetadata`]) instead of being skipped, so a caller
//! never renders a silently incomplete view.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use crate::error::{ListError, Result};
use crate::io::ReadAt;

use super::structures::*;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: u64 = 65535;

/// Low-level ZIP container parser.
///
/// Generic over the byte source so the same code serves local files and
/// in-memory buffers. Typically used through
/// [`ZipReader`](super::ZipReader) rather than directly.
pub struct ZipParser<R: ReadAt> {
    /// The underlying data source
    reader: R,
    /// Total size of the container in bytes
    size: u64,
}

impl<R: ReadAt> ZipParser<R> {
    /// Create a new parser for the given byte source.
    pub fn new(reader: R) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Find and parse the End of Central Directory record.
    ///
    /// The EOCD sits at the very end of an uncommented archive; with a
    /// trailing comment it moves up to 65535 bytes earlier, so the
    /// fallback scans backwards for the signature and validates the
    /// comment length against the remaining bytes.
    ///
    /// # Returns
    ///
    /// A tuple of (EOCD record, offset of EOCD in the container).
    ///
    /// # Errors
    ///
    /// [`ListError::ArchiveOpen`] when no valid EOCD exists, i.e. the
    /// input is not a ZIP archive.
    pub fn find_eocd(&self) -> Result<(EndOfCentralDirectory, u64)> {
        if self.size < EndOfCentralDirectory::SIZE as u64 {
            return Err(open_error("too small to be a ZIP archive"));
        }

        // Fast path: archive without a trailing comment.
        let offset = self.size - EndOfCentralDirectory::SIZE as u64;
        let mut buf = vec![0u8; EndOfCentralDirectory::SIZE];
        self.read_for_open(offset, &mut buf)?;

        if &buf[0..4] == EndOfCentralDirectory::SIGNATURE && &buf[20..22] == b"\x00\x00" {
            let eocd = EndOfCentralDirectory::from_bytes(&buf)?;
            return Ok((eocd, offset));
        }

        // The EOCD sits earlier when the archive carries a comment.
        // Scan backwards over the maximum comment window.
        let search_size = (MAX_COMMENT_SIZE + EndOfCentralDirectory::SIZE as u64).min(self.size);
        let search_start = self.size - search_size;

        let mut buf = vec![0u8; search_size as usize];
        self.read_for_open(search_start, &mut buf)?;

        for i in (0..buf.len().saturating_sub(EndOfCentralDirectory::SIZE)).rev() {
            if &buf[i..i + 4] == EndOfCentralDirectory::SIGNATURE {
                // A real EOCD's comment length matches the bytes left
                // after it; anything else is payload noise.
                let comment_len = u16::from_le_bytes([buf[i + 20], buf[i + 21]]) as usize;

                if comment_len == buf.len() - i - EndOfCentralDirectory::SIZE {
                    let eocd = EndOfCentralDirectory::from_bytes(
                        &buf[i..i + EndOfCentralDirectory::SIZE],
                    )?;
                    return Ok((eocd, search_start + i as u64));
                }
            }
        }

        Err(open_error("not a valid ZIP archive"))
    }

    /// Read the ZIP64 End of Central Directory record.
    ///
    /// Called when the regular EOCD carries saturated fields (0xFFFF /
    /// 0xFFFFFFFF); the locator immediately preceding the EOCD points at
    /// the 64-bit record.
    fn read_zip64_eocd(&self, eocd_offset: u64) -> Result<Zip64Eocd> {
        let locator_offset = eocd_offset
            .checked_sub(Zip64EocdLocator::SIZE as u64)
            .ok_or_else(|| open_error("missing ZIP64 locator"))?;
        let mut locator_buf = vec![0u8; Zip64EocdLocator::SIZE];
        self.read_for_open(locator_offset, &mut locator_buf)?;

        let locator = Zip64EocdLocator::from_bytes(&locator_buf)?;

        let mut eocd64_buf = vec![0u8; Zip64Eocd::MIN_SIZE];
        self.read_for_open(locator.eocd64_offset, &mut eocd64_buf)?;

        Zip64Eocd::from_bytes(&eocd64_buf)
    }

    /// List every member record in the archive, in index order.
    ///
    /// Reads the EOCD, then the entire central directory, then parses one
    /// [`RawEntry`] per record. No ordering beyond what the index stores.
    ///
    /// # Errors
    ///
    /// [`ListError::ArchiveOpen`] when the container is not a readable
    /// ZIP archive; [`ListError::EntryMetadata`] when any single record
    /// is unparsable (the listing aborts, no partial result).
    pub fn entries(&self) -> Result<Vec<RawEntry>> {
        let (eocd, eocd_offset) = self.find_eocd()?;

        let (cd_offset, cd_size, total_entries) = if eocd.is_zip64() {
            let eocd64 = self.read_zip64_eocd(eocd_offset)?;
            (eocd64.cd_offset, eocd64.cd_size, eocd64.total_entries)
        } else {
            (
                eocd.cd_offset as u64,
                eocd.cd_size as u64,
                eocd.total_entries as u64,
            )
        };

        match cd_offset.checked_add(cd_size) {
            Some(end) if end <= self.size => {}
            _ => return Err(open_error("central directory lies outside the container")),
        }

        let mut cd_data = vec![0u8; cd_size as usize];
        self.read_for_open(cd_offset, &mut cd_data)?;

        // Each record is at least 46 bytes; the declared count cannot
        // honestly exceed that bound
        let capacity = total_entries.min(cd_size / CDFH_MIN_SIZE as u64) as usize;
        let mut entries = Vec::with_capacity(capacity);
        let mut cursor = Cursor::new(cd_data.as_slice());

        for index in 0..total_entries as usize {
            entries.push(parse_cdfh(&mut cursor, index)?);
        }

        Ok(entries)
    }

    fn read_for_open(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.reader
            .read_exact_at(offset, buf)
            .map_err(|e| open_error(&e.to_string()))
    }
}

fn open_error(reason: &str) -> ListError {
    ListError::ArchiveOpen {
        reason: reason.to_string(),
    }
}

/// Parse one Central Directory File Header.
///
/// Walks every fixed field so the cursor lands on the next record, but
/// only the path, uncompressed size and DOS timestamp survive into the
/// [`RawEntry`]; a ZIP64 extra field (id 0x0001) overrides a saturated
/// 32-bit size.
fn parse_cdfh(cursor: &mut Cursor<&[u8]>, index: usize) -> Result<RawEntry> {
    parse_cdfh_record(cursor).map_err(|e| ListError::EntryMetadata {
        index,
        reason: e.to_string(),
    })
}

fn parse_cdfh_record(cursor: &mut Cursor<&[u8]>) -> std::io::Result<RawEntry> {
    use std::io::{Error, ErrorKind};

    let mut sig = [0u8; 4];
    cursor.read_exact(&mut sig)?;
    if sig != CDFH_SIGNATURE {
        return Err(Error::new(ErrorKind::InvalidData, "bad record signature"));
    }

    let _version_made_by = cursor.read_u16::<LittleEndian>()?;
    let _version_needed = cursor.read_u16::<LittleEndian>()?;
    let _flags = cursor.read_u16::<LittleEndian>()?;
    let _compression_method = cursor.read_u16::<LittleEndian>()?;
    let mod_time = cursor.read_u16::<LittleEndian>()?;
    let mod_date = cursor.read_u16::<LittleEndian>()?;
    let _crc32 = cursor.read_u32::<LittleEndian>()?;
    let _compressed_size = cursor.read_u32::<LittleEndian>()?;
    let mut size = cursor.read_u32::<LittleEndian>()? as u64;
    let file_name_length = cursor.read_u16::<LittleEndian>()?;
    let extra_field_length = cursor.read_u16::<LittleEndian>()?;
    let file_comment_length = cursor.read_u16::<LittleEndian>()?;
    let _disk_number_start = cursor.read_u16::<LittleEndian>()?;
    let _internal_attrs = cursor.read_u16::<LittleEndian>()?;
    let _external_attrs = cursor.read_u32::<LittleEndian>()?;
    let _lfh_offset = cursor.read_u32::<LittleEndian>()?;

    let mut name_bytes = vec![0u8; file_name_length as usize];
    cursor.read_exact(&mut name_bytes)?;
    // Lossy conversion keeps non-UTF8 member names displayable
    let path = String::from_utf8_lossy(&name_bytes).to_string();

    // A member whose path has no final component cannot be named in a
    // listing; fail closed instead of inventing one
    let stem = path.strip_suffix('/').unwrap_or(&path);
    if stem.is_empty() || stem.ends_with('/') {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "entry path has no name component",
        ));
    }

    // ZIP64 extended information (extra field id 0x0001): the real size
    // is stored here when the 32-bit field is saturated
    let extra_field_end = cursor.position() + extra_field_length as u64;

    while cursor.position() + 4 <= extra_field_end {
        let header_id = cursor.read_u16::<LittleEndian>()?;
        let field_size = cursor.read_u16::<LittleEndian>()?;

        if header_id == 0x0001 {
            if size == 0xFFFFFFFF && cursor.position() + 8 <= extra_field_end {
                size = cursor.read_u64::<LittleEndian>()?;
            }
            // Remaining ZIP64 fields describe compressed size and local
            // header offset; listing needs neither
            let remaining = extra_field_end.saturating_sub(cursor.position());
            cursor.set_position(cursor.position() + remaining);
        } else {
            cursor.set_position(cursor.position() + field_size as u64);
        }
    }

    cursor.set_position(extra_field_end);

    // Skip over the member comment (we don't use it)
    cursor.set_position(cursor.position() + file_comment_length as u64);

    Ok(RawEntry {
        path,
        size,
        mod_time,
        mod_date,
    })
}
