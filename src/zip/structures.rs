use byteorder::{LittleEndian, ReadBytesExt};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Cursor;

use crate::error::{ListError, Result};

fn invalid(reason: &str) -> ListError {
    ListError::ArchiveOpen {
        reason: reason.to_string(),
    }
}

/// End of Central Directory (EOCD) - 22 bytes minimum
pub struct EndOfCentralDirectory {
    pub disk_number: u16,
    pub disk_with_cd: u16,
    pub disk_entries: u16,
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
    pub comment_len: u16,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE || &data[0..4] != Self::SIGNATURE {
            return Err(invalid("invalid end of central directory record"));
        }

        let mut cursor = Cursor::new(&data[4..]);

        Ok(Self {
            disk_number: cursor.read_u16::<LittleEndian>()?,
            disk_with_cd: cursor.read_u16::<LittleEndian>()?,
            disk_entries: cursor.read_u16::<LittleEndian>()?,
            total_entries: cursor.read_u16::<LittleEndian>()?,
            cd_size: cursor.read_u32::<LittleEndian>()?,
            cd_offset: cursor.read_u32::<LittleEndian>()?,
            comment_len: cursor.read_u16::<LittleEndian>()?,
        })
    }

    pub fn is_zip64(&self) -> bool {
        self.disk_entries == 0xFFFF
            || self.total_entries == 0xFFFF
            || self.cd_size == 0xFFFFFFFF
            || self.cd_offset == 0xFFFFFFFF
    }
}

/// ZIP64 End of Central Directory Locator - 20 bytes
pub struct Zip64EocdLocator {
    pub disk_with_eocd64: u32,
    pub eocd64_offset: u64,
    pub total_disks: u32,
}

impl Zip64EocdLocator {
    pub const SIGNATURE: &'static [u8] = b"PK\x06\x07";
    pub const SIZE: usize = 20;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE || &data[0..4] != Self::SIGNATURE {
            return Err(invalid("invalid ZIP64 locator"));
        }

        let mut cursor = Cursor::new(&data[4..]);

        Ok(Self {
            disk_with_eocd64: cursor.read_u32::<LittleEndian>()?,
            eocd64_offset: cursor.read_u64::<LittleEndian>()?,
            total_disks: cursor.read_u32::<LittleEndian>()?,
        })
    }
}

/// ZIP64 End of Central Directory - 56 bytes minimum
pub struct Zip64Eocd {
    pub eocd64_size: u64,
    pub version_made_by: u16,
    pub version_needed: u16,
    pub disk_number: u32,
    pub disk_with_cd: u32,
    pub disk_entries: u64,
    pub total_entries: u64,
    pub cd_size: u64,
    pub cd_offset: u64,
}

impl Zip64Eocd {
    pub const SIGNATURE: &'static [u8] = b"PK\x06\x06";
    pub const MIN_SIZE: usize = 56;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::MIN_SIZE || &data[0..4] != Self::SIGNATURE {
            return Err(invalid("invalid ZIP64 end of central directory record"));
        }

        let mut cursor = Cursor::new(&data[4..]);

        Ok(Self {
            eocd64_size: cursor.read_u64::<LittleEndian>()?,
            version_made_by: cursor.read_u16::<LittleEndian>()?,
            version_needed: cursor.read_u16::<LittleEndian>()?,
            disk_number: cursor.read_u32::<LittleEndian>()?,
            disk_with_cd: cursor.read_u32::<LittleEndian>()?,
            disk_entries: cursor.read_u64::<LittleEndian>()?,
            total_entries: cursor.read_u64::<LittleEndian>()?,
            cd_size: cursor.read_u64::<LittleEndian>()?,
            cd_offset: cursor.read_u64::<LittleEndian>()?,
        })
    }
}

/// Central Directory File Header (CDFH) - 46 bytes minimum
pub const CDFH_SIGNATURE: &[u8] = b"PK\x01\x02";
pub const CDFH_MIN_SIZE: usize = 46;

/// Raw archive member record, as stored in the central directory.
///
/// Index order, uninterpreted: display name derivation and directory
/// classification happen in the listing layer.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Full path as stored, with a trailing '/' for directory members
    pub path: String,
    /// Uncompressed size in bytes
    pub size: u64,
    /// Raw MS-DOS modification time field
    pub mod_time: u16,
    /// Raw MS-DOS modification date field
    pub mod_date: u16,
}

impl RawEntry {
    /// Decode the MS-DOS timestamp fields.
    ///
    /// Returns `None` when the record carries no usable date; all-zero
    /// fields are common in archives written by tools that do not stamp
    /// their members.
    pub fn modified(&self) -> Option<NaiveDateTime> {
        let day = u32::from(self.mod_date & 0x1F);
        let month = u32::from((self.mod_date >> 5) & 0x0F);
        let year = i32::from((self.mod_date >> 9) & 0x7F) + 1980;
        let second = u32::from((self.mod_time & 0x1F) * 2);
        let minute = u32::from((self.mod_time >> 5) & 0x3F);
        let hour = u32::from((self.mod_time >> 11) & 0x1F);
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dos_timestamp_decodes() {
        let entry = RawEntry {
            path: "a.txt".to_string(),
            size: 1,
            // 12:30:00
            mod_time: (12 << 11) | (30 << 5),
            // 2024-06-01
            mod_date: ((2024 - 1980) << 9) | (6 << 5) | 1,
        };
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(entry.modified(), Some(expected));
    }

    #[test]
    fn zero_timestamp_is_absent() {
        let entry = RawEntry {
            path: "a.txt".to_string(),
            size: 1,
            mod_time: 0,
            mod_date: 0,
        };
        assert_eq!(entry.modified(), None);
    }

    #[test]
    fn out_of_range_date_is_absent() {
        let entry = RawEntry {
            path: "a.txt".to_string(),
            size: 1,
            mod_time: 0,
            // month 15 does not exist
            mod_date: ((2024 - 1980) << 9) | (15 << 5) | 1,
        };
        assert_eq!(entry.modified(), None);
    }
}
