/// Decode entry bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to a code point, so the fallback cannot fail.
pub fn decode_text(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_owned(),
        Err(_) => raw.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Text for one entry: its decoded payload, or an inline error note.
pub fn entry_text(name: &str, payload: anyhow::Result<Vec<u8>>) -> String {
    match payload {
        Ok(raw) => decode_text(&raw),
        Err(err) => format!("<error reading {}: {:#}>", name, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_text("const é = '✓';".as_bytes()), "const é = '✓';");
    }

    #[test]
    fn invalid_utf8_falls_back_to_latin1() {
        assert_eq!(decode_text(b"caf\xe9 \xff"), "café ÿ");
    }

    #[test]
    fn read_failure_becomes_inline_note() {
        let text = entry_text("lib/a.js", Err(anyhow!("CRC-32 mismatch")));
        assert_eq!(text, "<error reading lib/a.js: CRC-32 mismatch>");
    }
}
