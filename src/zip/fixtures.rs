//! Hand-assembled STORED archives for unit tests.

use flate2::Crc;

pub struct FixtureEntry<'a> {
    pub name: &'a str,
    pub payload: &'a [u8],
    pub crc32: u32,
    /// Size advertised through a ZIP64 extra field instead of the real one
    pub zip64_size: Option<u64>,
}

impl<'a> FixtureEntry<'a> {
    pub fn new(name: &'a str, payload: &'a [u8]) -> Self {
        Self {
            name,
            payload,
            crc32: crc_of(payload),
            zip64_size: None,
        }
    }
}

pub fn crc_of(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

pub fn stored_archive(entries: &[FixtureEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offsets = Vec::new();

    for entry in entries {
        offsets.push(out.len() as u32);
        out.extend_from_slice(b"PK\x03\x04");
        out.extend_from_slice(&[20, 0, 0, 0, 0, 0, 0, 0, 0, 0]); // version, flags, method, time, date
        out.extend_from_slice(&entry.crc32.to_le_bytes());
        out.extend_from_slice(&(entry.payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&(entry.payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&(entry.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(entry.payload);
    }

    let cd_offset = out.len() as u32;
    for (entry, lfh_offset) in entries.iter().zip(offsets) {
        let (size, extra) = match entry.zip64_size {
            Some(claimed) => {
                let mut extra = Vec::new();
                extra.extend_from_slice(&1u16.to_le_bytes());
                extra.extend_from_slice(&16u16.to_le_bytes());
                extra.extend_from_slice(&claimed.to_le_bytes()); // uncompressed
                extra.extend_from_slice(&claimed.to_le_bytes()); // compressed
                (0xFFFFFFFF, extra)
            }
            None => (entry.payload.len() as u32, Vec::new()),
        };

        out.extend_from_slice(b"PK\x01\x02");
        out.extend_from_slice(&[20, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0]); // versions, flags, method, time, date
        out.extend_from_slice(&entry.crc32.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&(entry.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&(extra.len() as u16).to_le_bytes());
        out.extend_from_slice(&[0; 10]); // comment, disk, internal, external
        out.extend_from_slice(&lfh_offset.to_le_bytes());
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(&extra);
    }
    let cd_size = out.len() as u32 - cd_offset;

    let count = (entries.len() as u16).to_le_bytes();
    out.extend_from_slice(b"PK\x05\x06");
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&count);
    out.extend_from_slice(&count);
    out.extend_from_slice(&cd_size.to_le_bytes());
    out.extend_from_slice(&cd_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out
}
