//! Shared fixtures: ZIP archives built on the fly in temp directories.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::write::FileOptions;

/// Write an archive with the given entries, in order, using `method`.
/// Names ending in `/` become directory entries.
pub fn write_zip_with(
    dir: &Path,
    file_name: &str,
    method: CompressionMethod,
    entries: &[(&str, &[u8])],
) -> PathBuf {
    let path = dir.join(file_name);
    let file = std::fs::File::create(&path).expect("create archive");
    let mut zip = zip::ZipWriter::new(file);
    let options = FileOptions::default().compression_method(method);

    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).expect("add directory");
        } else {
            zip.start_file(*name, options).expect("start file");
            zip.write_all(data).expect("write entry");
        }
    }

    zip.finish().expect("finish archive");
    path
}

/// STORED archive, so payload bytes appear verbatim in the file.
pub fn write_zip(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    write_zip_with(dir, file_name, CompressionMethod::Stored, entries)
}

/// Replace the first occurrence of `from` in the file at `path` with `to`.
pub fn patch_bytes(path: &Path, from: &[u8], to: &[u8]) {
    assert_eq!(from.len(), to.len(), "patch must keep the archive layout");
    let mut data = std::fs::read(path).expect("read archive");
    let at = data
        .windows(from.len())
        .position(|w| w == from)
        .expect("pattern present in archive");
    data[at..at + to.len()].copy_from_slice(to);
    std::fs::write(path, data).expect("rewrite archive");
}
