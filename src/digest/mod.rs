//! Archive to text digest.
//!
//! Matched entries flow through decode, comment stripping and
//! normalization into [`Section`]s, which are assembled into one document
//! in archive order. A bad entry only spoils its own section.

mod assemble;
mod decode;
mod filter;
mod normalize;
mod strip;

pub use assemble::{
    AssembleOptions, EMPTY_PLACEHOLDER, MARKER_LINE, Section, assemble, diagnostic_listing,
};
pub use decode::{decode_text, entry_text};
pub use filter::{DEFAULT_EXTENSIONS, ExtensionFilter, entry_extension};
pub use normalize::normalize;
pub use strip::{CommentStyle, strip_c_comments, strip_comments, strip_html_comments};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DigestError, Result};
use crate::io::{LocalFileReader, ReadAt};
use crate::zip::ZipExtractor;

/// Everything that shapes a run besides the input and output paths
#[derive(Debug, Clone, Default)]
pub struct DigestOptions {
    pub filter: ExtensionFilter,
    pub keep_markers: bool,
    pub minify: bool,
    pub show_diagnosis: bool,
    pub verbose: bool,
}

impl DigestOptions {
    fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            keep_markers: self.keep_markers,
            minify: self.minify,
        }
    }
}

/// Sections for the matched entries plus the full, unfiltered listing
#[derive(Debug, Clone)]
pub struct ArchiveDigest {
    pub names: Vec<String>,
    pub sections: Vec<Section>,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The combined document was written
    Written { files: usize, output: PathBuf },
    /// Nothing matched; the archive listing was written instead
    DiagnosisWritten { output: PathBuf },
    /// Nothing matched and nothing was written
    NoMatches,
}

impl Outcome {
    /// Process exit status; an empty match is not a failure
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Digest every matching entry readable through `extractor`.
///
/// Only a broken central directory fails; entry-level problems end up as
/// `<error reading ...>` text in that entry's section.
pub async fn digest_entries<R: ReadAt>(
    extractor: &ZipExtractor<R>,
    options: &DigestOptions,
) -> anyhow::Result<ArchiveDigest> {
    let entries = extractor.list_files().await?;
    let mut sections = Vec::new();

    for entry in &entries {
        if entry.is_directory {
            continue;
        }
        let Some(ext) = options.filter.select(&entry.file_name) else {
            continue;
        };

        if options.verbose {
            eprintln!("  packing: {}", entry.file_name);
        }

        let payload = extractor.extract_to_memory(entry).await;
        if options.verbose {
            if let Err(err) = &payload {
                eprintln!("  warning: {}: {:#}", entry.file_name, err);
            }
        }

        let text = entry_text(&entry.file_name, payload);
        sections.push(Section::from_text(&entry.file_name, &ext, &text));
    }

    Ok(ArchiveDigest {
        names: entries.into_iter().map(|e| e.file_name).collect(),
        sections,
    })
}

/// Digest the archive at `archive` and write the result to `output`.
///
/// The document is built completely in memory before `output` is touched,
/// so a failed run never leaves a truncated file behind.
pub async fn digest_archive(
    archive: &Path,
    output: &Path,
    options: &DigestOptions,
) -> Result<Outcome> {
    if !archive.exists() {
        return Err(DigestError::ArchiveNotFound {
            path: archive.to_path_buf(),
        });
    }

    let archive_error = |reason: anyhow::Error| DigestError::Archive {
        path: archive.to_path_buf(),
        reason,
    };

    let digest = {
        let reader = Arc::new(LocalFileReader::new(archive).map_err(archive_error)?);
        let extractor = ZipExtractor::new(reader);
        digest_entries(&extractor, options)
            .await
            .map_err(archive_error)?
    };

    if digest.sections.is_empty() {
        if !options.show_diagnosis {
            return Ok(Outcome::NoMatches);
        }
        let listing = diagnostic_listing(&options.filter, &digest.names);
        write_output(output, &listing).await?;
        return Ok(Outcome::DiagnosisWritten {
            output: output.to_path_buf(),
        });
    }

    let document = assemble(&digest.sections, options.assemble_options());
    write_output(output, &document).await?;

    Ok(Outcome::Written {
        files: digest.sections.len(),
        output: output.to_path_buf(),
    })
}

async fn write_output(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| DigestError::Output {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryReader;
    use crate::zip::fixtures::{FixtureEntry, stored_archive};

    #[tokio::test]
    async fn oversized_entry_degrades_and_the_rest_continue() {
        let archive = stored_archive(&[
            FixtureEntry {
                zip64_size: Some(u64::MAX / 2 + 7),
                ..FixtureEntry::new("bad.js", b"broken();")
            },
            FixtureEntry::new("good.js", b"fine(); // ok"),
        ]);
        let extractor = ZipExtractor::new(Arc::new(MemoryReader::new(archive)));

        let digest = digest_entries(&extractor, &DigestOptions::default())
            .await
            .unwrap();

        assert_eq!(digest.sections.len(), 2);
        assert_eq!(digest.sections[0].name, "bad.js");
        assert!(digest.sections[0].body.starts_with("<error reading bad.js: entry data"));
        assert!(digest.sections[0].body.ends_with("lies outside the archive>"));
        assert_eq!(digest.sections[1].body, "fine();");
    }

    #[tokio::test]
    async fn directory_entries_are_listed_but_not_digested() {
        let archive = stored_archive(&[
            FixtureEntry::new("lib.js/", b""),
            FixtureEntry::new("lib.js/main.js", b"main();"),
        ]);
        let extractor = ZipExtractor::new(Arc::new(MemoryReader::new(archive)));

        let digest = digest_entries(&extractor, &DigestOptions::default())
            .await
            .unwrap();

        assert_eq!(digest.names, ["lib.js/", "lib.js/main.js"]);
        assert_eq!(digest.sections.len(), 1);
        assert_eq!(digest.sections[0].name, "lib.js/main.js");
    }
}
