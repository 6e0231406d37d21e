use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "zipls")]
#[command(version)]
#[command(about = "List ZIP archives and folders as preview entries", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipls photos.zip               list archive members, directories first\n  \
  zipls -l photos.zip            long listing with sizes and dates\n  \
  zipls ~/Downloads              list a folder (hidden files skipped)")]
pub struct Cli {
    /// ZIP archive or folder to list
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Long listing (size and modification date columns)
    #[arg(short = 'l')]
    pub long: bool,

    /// Suppress the summary footer in long listings
    #[arg(short = 'q')]
    pub quiet: bool,
}
