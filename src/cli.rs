use clap::Parser;
use std::path::PathBuf;

use crate::digest::{DEFAULT_EXTENSIONS, DigestOptions, ExtensionFilter};

#[derive(Parser, Debug)]
#[command(name = "zipdigest")]
#[command(version)]
#[command(
    about = "Create a compact AI-readable combined file from a ZIP, removing comments",
    long_about = None
)]
#[command(after_help = "Examples:\n  \
  zipdigest site.zip site.txt                      js, ts and html files\n  \
  zipdigest app.zip app.txt --exts ts,tsx,scss     pick other extensions\n  \
  zipdigest app.zip app.txt --minify --keep-markers\n  \
  zipdigest odd.zip odd.txt --show-diagnosis       list the archive if nothing matches")]
pub struct Cli {
    /// Input ZIP archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output text file (overwritten)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Comma-separated extensions to keep
    #[arg(long, value_name = "EXTS", default_value = DEFAULT_EXTENSIONS)]
    pub exts: ExtensionFilter,

    /// Insert a visible placeholder marker line after each file header
    #[arg(long)]
    pub keep_markers: bool,

    /// Produce very compact output (collapse newlines and whitespace)
    #[arg(long)]
    pub minify: bool,

    /// If no files match, write a diagnostic file listing the archive contents
    #[arg(long)]
    pub show_diagnosis: bool,

    /// Report each packed entry and unreadable entries on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn digest_options(&self) -> DigestOptions {
        DigestOptions {
            filter: self.exts.clone(),
            keep_markers: self.keep_markers,
            minify: self.minify,
            show_diagnosis: self.show_diagnosis,
            verbose: self.verbose,
        }
    }
}
