use std::io::Read;
use std::sync::Arc;

use flate2::Crc;
use flate2::read::DeflateDecoder;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// Reads entry listings and payloads out of a ZIP archive
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in central directory order
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Decompress one entry into memory, verifying its size and CRC-32
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        if entry.is_encrypted() {
            bail!("encrypted entries are not supported");
        }

        let data_offset = self.parser.get_data_offset(entry).await?;
        let in_bounds = data_offset
            .checked_add(entry.compressed_size)
            .is_some_and(|end| end <= self.parser.reader().size());
        if !in_bounds {
            bail!(
                "entry data ({} bytes at {}) lies outside the archive",
                entry.compressed_size,
                data_offset
            );
        }

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_exact_at(data_offset, &mut raw)
            .await?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflate => {
                // One byte past the declared size is enough to detect a mismatch
                let mut out = Vec::new();
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size.saturating_add(1))
                    .read_to_end(&mut out)
                    .context("corrupt deflate stream")?;
                out
            }
            CompressionMethod::Unknown(method) => {
                bail!("unsupported compression method {}", method)
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            bail!(
                "size mismatch: expected {} bytes, got {}",
                entry.uncompressed_size,
                data.len()
            );
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            bail!(
                "CRC-32 mismatch: expected {:08x}, got {:08x}",
                entry.crc32,
                crc.sum()
            );
        }

        Ok(data)
    }
}
