//! Selection of the code points that get converted, and their output width.

use crate::TranscodeConfig;
use unic_ucd_block::Block;

/// The number of grid cells a glyph occupies horizontally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellWidth {
    Normal,
    Wide,
}
impl CellWidth {
    pub fn cells(self) -> u32 {
        match self {
            CellWidth::Normal => 1,
            CellWidth::Wide => 2,
        }
    }
}

/// A closed interval of code points converted with a fixed cell width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodeRange {
    pub start: u32,
    pub end: u32,
    pub width: CellWidth,
    /// The Unicode block the range belongs to.
    pub block: &'static str,
}
impl CodeRange {
    const fn wide(start: u32, end: u32, block: &'static str) -> Self {
        CodeRange { start, end, width: CellWidth::Wide, block }
    }

    pub fn contains(&self, code_point: i64) -> bool {
        self.start as i64 <= code_point && code_point <= self.end as i64
    }
}

/// Double width ranges, sorted by start and non-overlapping.
pub static WIDE_RANGES: &[CodeRange] = &[
    CodeRange::wide(0x1100, 0x11FF, "Hangul Jamo"),
    CodeRange::wide(0x2E80, 0x2EFF, "CJK Radicals Supplement"),
    CodeRange::wide(0x2F00, 0x2FDF, "Kangxi Radicals"),
    CodeRange::wide(0x2FF0, 0x2FFF, "Ideographic Description Characters"),
    // U+3000 is a space, and stays narrow.
    CodeRange::wide(0x3001, 0x303F, "CJK Symbols and Punctuation"),
    CodeRange::wide(0x3100, 0x312F, "Bopomofo"),
    CodeRange::wide(0x31A0, 0x31BF, "Bopomofo Extended"),
    CodeRange::wide(0x31C0, 0x31EF, "CJK Strokes"),
    CodeRange::wide(0x3400, 0x4DBF, "CJK Unified Ideographs Extension A"),
    CodeRange::wide(0x4E00, 0x9FCF, "CJK Unified Ideographs"),
    CodeRange::wide(0xA960, 0xA97F, "Hangul Jamo Extended-A"),
    CodeRange::wide(0xAC00, 0xD7A3, "Hangul Syllables"),
    CodeRange::wide(0xD7B0, 0xD7FF, "Hangul Jamo Extended-B"),
    CodeRange::wide(0xF900, 0xFAFF, "CJK Compatibility Ideographs"),
];

/// Finds the wide range containing a code point.
pub fn wide_range(code_point: i64) -> Option<&'static CodeRange> {
    let idx = WIDE_RANGES.partition_point(|range| (range.end as i64) < code_point);
    WIDE_RANGES.get(idx).filter(|range| range.contains(code_point))
}

/// Decides how a glyph is converted, or `None` if it is skipped.
///
/// Wide ranges are checked first. Anything else inside the configured plane is normal width.
pub fn classify(code_point: i64, config: &TranscodeConfig) -> Option<CellWidth> {
    if let Some(range) = wide_range(code_point) {
        Some(range.width)
    } else if config.plane_start as i64 <= code_point && code_point <= config.plane_end as i64 {
        Some(CellWidth::Normal)
    } else {
        None
    }
}

/// The name of the Unicode block of a code point, for diagnostics.
pub fn block_name(code_point: i64) -> &'static str {
    let block = u32::try_from(code_point).ok().and_then(char::from_u32).and_then(Block::of);
    match block {
        None => "Unknown Block",
        Some(block) => block.name,
    }
}
