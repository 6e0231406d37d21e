//! End-to-end folder listing tests, including the path dispatch.

use std::fs;
use std::io::{Cursor, Write};

use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zipls::{list_folder, list_path};

#[test]
fn folder_listing_matches_archive_ordering_rules() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("File10.txt"), b"ten").unwrap();
    fs::write(dir.path().join("file2.txt"), b"two").unwrap();
    fs::write(dir.path().join("zz.md"), b"z").unwrap();

    let entries = list_folder(dir.path()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["sub", "file2.txt", "File10.txt", "zz.md"]);
}

#[test]
fn hidden_entries_are_skipped_in_folders_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden"), b"x").unwrap();
    fs::write(dir.path().join("shown.txt"), b"x").unwrap();

    let entries = list_folder(dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "shown.txt");

    // The archive path keeps dot-entries
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(".hidden", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"x").unwrap();
    let data = writer.finish().unwrap().into_inner();

    let archived = zipls::list_archive_bytes(&data).unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].name, ".hidden");
}

#[test]
fn list_path_dispatches_on_kind() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inside.txt"), b"x").unwrap();

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("member.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"m").unwrap();
    let archive_path = dir.path().join("bundle.zip");
    fs::write(&archive_path, writer.finish().unwrap().into_inner()).unwrap();

    let from_folder = list_path(dir.path()).unwrap();
    let folder_names: Vec<&str> = from_folder.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(folder_names, ["bundle.zip", "inside.txt"]);

    let from_archive = list_path(&archive_path).unwrap();
    assert_eq!(from_archive.len(), 1);
    assert_eq!(from_archive[0].name, "member.txt");
}
