//! # zipdigest
//!
//! Flatten the source files inside a ZIP archive into one text document
//! that a language model can read in a single pass.
//!
//! Entries whose extension is in the filter (default `js,ts,html`) are
//! decoded, stripped of comments, whitespace-normalized and emitted as
//! labelled sections in archive order:
//!
//! ```text
//! ===== FILE: src/app.js =====
//! var x = 1;
//!
//! ===== FILE: index.html =====
//! <p>hello</p>
//! ```
//!
//! Comment removal is pattern based, not a parser. Comment-like text inside
//! string or regex literals is removed too; `//` directly after `:` is kept
//! so URLs survive.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use zipdigest::{DigestOptions, Outcome, digest_archive};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let outcome = digest_archive(
//!         Path::new("site.zip"),
//!         Path::new("site.txt"),
//!         &DigestOptions::default(),
//!     )
//!     .await?;
//!
//!     if let Outcome::Written { files, .. } = outcome {
//!         println!("{} files digested", files);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod digest;
pub mod error;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use digest::{DigestOptions, ExtensionFilter, Outcome, Section, digest_archive};
pub use error::DigestError;
pub use io::{LocalFileReader, MemoryReader, ReadAt};
pub use zip::{ZipExtractor, ZipFileEntry};
