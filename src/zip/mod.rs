//! Minimal ZIP reader.
//!
//! Lists the central directory in the archive's native order and pulls
//! individual entries into memory. Nothing is ever written back.
//!
//! - [`structures`]: fixed-layout records (EOCD, ZIP64 EOCD, central headers)
//! - [`parser`]: locating and walking the central directory
//! - [`extractor`]: decompression and integrity checks for single entries
//!
//! Supported: standard and ZIP64 archives, archive comments, STORED and
//! DEFLATE entries. Encrypted entries, multi-disk archives and other
//! compression methods are reported as per-entry errors.

mod extractor;
#[cfg(test)]
pub(crate) mod fixtures;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
