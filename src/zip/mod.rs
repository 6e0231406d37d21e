//! ZIP archive index reading.
//!
//! This module reads the listing-level metadata of ZIP archives,
//! supporting both the standard format and ZIP64 extensions for large
//! archives.
//!
//! ## Architecture
//!
//! The module is organized into three components:
//!
//! - [`structures`]: Data structures representing ZIP format elements (EOCD, member records, etc.)
//! - [`parser`]: Low-level parsing of ZIP structures from raw bytes
//! - [`reader`]: High-level listing API for end users
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each member
//! 2. Central Directory with metadata for all members
//! 3. End of Central Directory (EOCD) record at the end
//!
//! This implementation reads the EOCD first (from the end of the file),
//! then the Central Directory, which holds everything a listing needs
//! without ever touching member payloads.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions for archives and members > 4GB
//! - Archives with trailing comments
//!
//! ## Limitations
//!
//! - No payload access: members are never decompressed or extracted
//! - No multi-disk archive support

mod parser;
mod reader;
mod structures;

pub use parser::ZipParser;
pub use reader::ZipReader;
pub use structures::*;
