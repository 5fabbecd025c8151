#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Bom => "utf-8-sig",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Detects the text encoding from BOMs, NUL-byte layout and UTF-8 validity.
/// Never fails: anything not recognised as UTF-8 or UTF-16 is read as Latin-1.
pub fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return (String::from_utf8_lossy(rest).into_owned(), TextEncoding::Utf8Bom);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return (decode_utf16(rest, u16::from_le_bytes), TextEncoding::Utf16Le);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return (decode_utf16(rest, u16::from_be_bytes), TextEncoding::Utf16Be);
    }
    if let Some(enc) = sniff_utf16(bytes) {
        let unit: fn([u8; 2]) -> u16 = match enc {
            TextEncoding::Utf16Be => u16::from_be_bytes,
            _ => u16::from_le_bytes,
        };
        return (decode_utf16(bytes, unit), enc);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), TextEncoding::Utf8),
        Err(_) => (
            bytes.iter().map(|&b| char::from(b)).collect(),
            TextEncoding::Latin1,
        ),
    }
}

/// BOM-less UTF-16 text is mostly ASCII, so every other byte is NUL.
fn sniff_utf16(bytes: &[u8]) -> Option<TextEncoding> {
    if bytes.len() < 2 || bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes.len() / 2;
    let (mut first_nul, mut second_nul) = (0usize, 0usize);
    for pair in bytes.chunks_exact(2) {
        first_nul += usize::from(pair[0] == 0);
        second_nul += usize::from(pair[1] == 0);
    }
    if second_nul * 2 >= units && first_nul * 4 < units {
        Some(TextEncoding::Utf16Le)
    } else if first_nul * 2 >= units && second_nul * 4 < units {
        Some(TextEncoding::Utf16Be)
    } else {
        None
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect::<Vec<_>>();
    String::from_utf16_lossy(&units)
}
