//! End-to-end archive listing tests against real ZIP files.

use std::fs;
use std::io::{Cursor, Write};

use chrono::NaiveDate;
use tempfile::tempdir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;
use zipls::{ListError, list_archive, list_archive_bytes};

fn stored() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
}

/// A small archive mixing directories, nesting and case/number names.
fn sample_archive() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("b.txt", stored()).unwrap();
    writer.write_all(b"beta").unwrap();
    writer.add_directory("photos", stored()).unwrap();
    writer.start_file("photos/IMG10.jpg", stored()).unwrap();
    writer.write_all(b"ten").unwrap();
    writer.start_file("photos/img2.jpg", stored()).unwrap();
    writer.write_all(b"two").unwrap();
    writer.add_directory("Music", stored()).unwrap();
    writer.start_file("A1.txt", stored()).unwrap();
    writer.write_all(b"alpha").unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn flat_listing_is_directory_first_and_natural() {
    let entries = list_archive_bytes(&sample_archive()).unwrap();

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["Music", "photos", "A1.txt", "b.txt", "img2.jpg", "IMG10.jpg"]
    );

    // One entry per member, nothing filtered or merged
    assert_eq!(entries.len(), 6);
}

#[test]
fn directory_classification_comes_from_the_path() {
    let entries = list_archive_bytes(&sample_archive()).unwrap();

    for entry in &entries {
        assert_eq!(entry.is_directory, entry.path.ends_with('/'));
        assert!(!entry.name.is_empty());
        assert!(!entry.name.contains('/'));
    }

    let photos = entries.iter().find(|e| e.name == "photos").unwrap();
    assert!(photos.is_directory);
    assert_eq!(photos.path, "photos/");
    assert_eq!(photos.extension(), None);

    let img = entries.iter().find(|e| e.name == "IMG10.jpg").unwrap();
    assert!(!img.is_directory);
    assert_eq!(img.path, "photos/IMG10.jpg");
    assert_eq!(img.extension(), Some("jpg".to_string()));
}

#[test]
fn file_and_memory_listings_agree() {
    let data = sample_archive();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.zip");
    fs::write(&path, &data).unwrap();

    let from_file = list_archive(&path).unwrap();
    let from_memory = list_archive_bytes(&data).unwrap();
    assert_eq!(from_file, from_memory);
}

#[test]
fn sizes_are_uncompressed() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    // Highly compressible payload, stored deflated
    writer
        .start_file("big.log", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(&[b'a'; 400]).unwrap();
    let data = writer.finish().unwrap().into_inner();

    let entries = list_archive_bytes(&data).unwrap();
    assert_eq!(entries[0].size, 400);
}

#[test]
fn modification_time_survives() {
    let mtime = zip::DateTime::from_date_and_time(2024, 6, 1, 12, 30, 0).unwrap();
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("stamped.txt", stored().last_modified_time(mtime))
        .unwrap();
    writer.write_all(b"x").unwrap();
    let data = writer.finish().unwrap().into_inner();

    let entries = list_archive_bytes(&data).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();
    assert_eq!(entries[0].modified, Some(expected));
}

#[test]
fn zero_byte_file_fails_to_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.zip");
    fs::write(&path, b"").unwrap();

    assert!(matches!(
        list_archive(&path),
        Err(ListError::ArchiveOpen { .. })
    ));
}

#[test]
fn non_zip_file_fails_to_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"these are just notes, not an archive at all").unwrap();

    assert!(matches!(
        list_archive(&path),
        Err(ListError::ArchiveOpen { .. })
    ));
}

#[test]
fn missing_file_fails_to_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowhere.zip");

    assert!(matches!(
        list_archive(&path),
        Err(ListError::ArchiveOpen { .. })
    ));
}
