//! Glyph widths for Helvetica and Helvetica-Bold from the Adobe core-14
//! AFM files, in WinAnsi code order, thousandths of the font size.
//!
//! Right-aligned columns and width-capping need real measurements; an
//! average-character-width estimate drifts badly on numeric columns.

use super::FontId;
use super::winansi;

/// Helvetica widths for codes 0x20..=0xFF.
#[rustfmt::skip]
static HELVETICA: [u16; 224] = [
    // 0x20
     278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0x30
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,  278,  278,  584,  584,  584,  556,
    // 0x40
    1015,  667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,  722,  778,
    // 0x50
     667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,  278,  278,  278,  469,  556,
    // 0x60
     333,  556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,  556,  556,
    // 0x70
     556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,  334,  260,  334,  584,    0,
    // 0x80
     556,    0,  222,  556,  333, 1000,  556,  556,  333, 1000,  667,  333, 1000,    0,  611,    0,
    // 0x90
       0,  222,  222,  333,  333,  350,  556, 1000,  333, 1000,  500,  333,  944,    0,  500,  667,
    // 0xA0
     278,  333,  556,  556,  556,  556,  260,  556,  333,  737,  370,  556,  584,  333,  737,  333,
    // 0xB0
     400,  584,  333,  333,  333,  556,  537,  278,  333,  333,  365,  556,  834,  834,  834,  611,
    // 0xC0
     667,  667,  667,  667,  667,  667, 1000,  722,  667,  667,  667,  667,  278,  278,  278,  278,
    // 0xD0
     722,  722,  778,  778,  778,  778,  778,  584,  778,  722,  722,  722,  722,  667,  667,  611,
    // 0xE0
     556,  556,  556,  556,  556,  556,  889,  500,  556,  556,  556,  556,  278,  278,  278,  278,
    // 0xF0
     556,  556,  556,  556,  556,  556,  556,  584,  611,  556,  556,  556,  556,  500,  556,  500,
];

/// Helvetica-Bold widths for codes 0x20..=0xFF.
#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 224] = [
    // 0x20
     278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0x30
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,  333,  333,  584,  584,  584,  611,
    // 0x40
     975,  722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,  722,  778,
    // 0x50
     667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,  333,  278,  333,  584,  556,
    // 0x60
     333,  556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,  611,  611,
    // 0x70
     611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,  389,  280,  389,  584,    0,
    // 0x80
     556,    0,  278,  556,  500, 1000,  556,  556,  333, 1000,  667,  333, 1000,    0,  611,    0,
    // 0x90
       0,  278,  278,  500,  500,  350,  556, 1000,  333, 1000,  556,  333,  944,    0,  500,  667,
    // 0xA0
     278,  333,  556,  556,  556,  556,  280,  556,  333,  737,  370,  556,  584,  333,  737,  333,
    // 0xB0
     400,  584,  333,  333,  333,  611,  556,  278,  333,  333,  365,  556,  834,  834,  834,  611,
    // 0xC0
     722,  722,  722,  722,  722,  722, 1000,  722,  667,  667,  667,  667,  278,  278,  278,  278,
    // 0xD0
     722,  722,  778,  778,  778,  778,  778,  584,  778,  722,  722,  722,  722,  667,  667,  611,
    // 0xE0
     556,  556,  556,  556,  556,  556,  889,  556,  556,  556,  556,  556,  278,  278,  278,  278,
    // 0xF0
     611,  611,  611,  611,  611,  611,  611,  584,  611,  611,  611,  611,  611,  556,  611,  556,
];

/// Width of one WinAnsi code in thousandths of the font size.
/// Codes below 0x20 are control codes and measure zero.
pub fn glyph_width(font: FontId, code: u8) -> u16 {
    if code < 0x20 {
        return 0;
    }
    let table = match font {
        FontId::Regular => &HELVETICA,
        FontId::Bold => &HELVETICA_BOLD,
    };
    table[(code - 0x20) as usize]
}

/// Measure a string at the given size, in points. Uses the same WinAnsi
/// conversion as the PDF backend, so measurement and output agree.
pub fn text_width(text: &str, font: FontId, size: f32) -> f32 {
    let units: u32 = winansi::encode(text)
        .iter()
        .map(|&code| u32::from(glyph_width(font, code)))
        .sum();
    units as f32 * size / 1000.0
}
