//! UTF-8 → WinAnsiEncoding (CP1252) conversion for PDF string objects.
//!
//! WinAnsi covers ASCII plus Latin-1, with a handful of typographic
//! characters mapped into the 0x80–0x9F window. Anything outside the
//! encoding renders as `?`; the document model is German-language text,
//! which WinAnsi covers completely (umlauts, ß, §, €, ·).

/// Byte substituted for characters WinAnsi cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Codepoints that land in the 0x80–0x9F window of CP1252.
/// Sorted by codepoint for binary search.
static OVERRIDES: &[(char, u8)] = &[
    ('\u{0152}', 0x8C), // Œ
    ('\u{0153}', 0x9C), // œ
    ('\u{0160}', 0x8A), // Š
    ('\u{0161}', 0x9A), // š
    ('\u{0178}', 0x9F), // Ÿ
    ('\u{017D}', 0x8E), // Ž
    ('\u{017E}', 0x9E), // ž
    ('\u{0192}', 0x83), // ƒ
    ('\u{02C6}', 0x88), // ˆ
    ('\u{02DC}', 0x98), // ˜
    ('\u{2013}', 0x96), // –
    ('\u{2014}', 0x97), // —
    ('\u{2018}', 0x91), // ‘
    ('\u{2019}', 0x92), // ’
    ('\u{201A}', 0x82), // ‚
    ('\u{201C}', 0x93), // “
    ('\u{201D}', 0x94), // ”
    ('\u{201E}', 0x84), // „
    ('\u{2020}', 0x86), // †
    ('\u{2021}', 0x87), // ‡
    ('\u{2022}', 0x95), // •
    ('\u{2026}', 0x85), // …
    ('\u{2030}', 0x89), // ‰
    ('\u{2039}', 0x8B), // ‹
    ('\u{203A}', 0x9B), // ›
    ('\u{20AC}', 0x80), // €
    ('\u{2122}', 0x99), // ™
];

/// Encode one character, substituting [`REPLACEMENT`] when unmapped.
pub fn encode_char(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7E}' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u8,
        _ => OVERRIDES
            .binary_search_by_key(&c, |&(ch, _)| ch)
            .map(|i| OVERRIDES[i].1)
            .unwrap_or(REPLACEMENT),
    }
}

/// Encode a string to WinAnsi bytes for a PDF literal string.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}
