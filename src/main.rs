//! Main entry point for the zipls CLI application.
//!
//! This binary is the host layer a preview UI would otherwise be: it
//! calls the listing library on a folder or ZIP archive and renders the
//! ordered entries as text.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use zipls::{Cli, Entry, list_path};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = Path::new(&cli.path);
    let entries =
        list_path(path).with_context(|| format!("cannot list {}", path.display()))?;

    if cli.long {
        print_long(&entries);
        if !cli.quiet {
            print_summary(&entries);
        }
    } else {
        for entry in &entries {
            println!("{}", display_name(entry));
        }
    }

    Ok(())
}

/// Print the detailed table: size, modification date, name.
fn print_long(entries: &[Entry]) {
    println!("{:>10}  {:>16}  Name", "Size", "Modified");
    println!("{}", "-".repeat(46));

    for entry in entries {
        let size = if entry.is_directory {
            "-".to_string()
        } else {
            entry.size.to_string()
        };
        let modified = entry
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("{:>10}  {:>16}  {}", size, modified, display_name(entry));
    }
}

/// Print the totals footer for long listings.
fn print_summary(entries: &[Entry]) {
    let folders = entries.iter().filter(|e| e.is_directory).count();
    let files = entries.len() - folders;
    let bytes: u64 = entries.iter().map(|e| e.size).sum();

    println!("{}", "-".repeat(46));
    println!("{} folders, {} files, {}", folders, files, format_size(bytes));
}

/// Directory entries render with a trailing separator, like `ls -p`.
fn display_name(entry: &Entry) -> String {
    if entry.is_directory {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    }
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
