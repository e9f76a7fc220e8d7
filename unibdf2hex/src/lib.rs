//! A streaming converter from BDF bitmap fonts to the `.hex` format used by GNU Unifont.
//!
//! The converter reads a BDF glyph stream line by line, keeps only the glyphs whose code points
//! fall into the supported ranges (see [`ranges`]), and writes one `CODEPOINT:HEXDATA` line per
//! glyph. Each glyph is normalized onto a fixed grid: the font height taken from the header, and
//! one or two cells of the header's base width depending on whether the code point is a wide
//! (CJK or Hangul) character.
//!
//! Only the `DWIDTH`, `FONTBOUNDINGBOX`, `STARTCHAR`, `ENCODING`, `BBX`, `BITMAP` and `END*`
//! fields of the input are looked at. Everything else is skipped.
//!
//! ```
//! let bdf = "STARTCHAR A\nENCODING 65\nBBX 8 4 0 0\nBITMAP\n18\n24\n42\n7E\nENDCHAR\n";
//! let mut out = Vec::new();
//! let config = unibdf2hex::TranscodeConfig::default().default_height(8);
//! unibdf2hex::transcode(bdf.as_bytes(), &mut out, &config).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "0041:1824427E00000000\n");
//! ```

mod config;
mod emit;
mod error;
mod fields;
mod glyph;
mod header;
mod lines;
pub mod ranges;
mod transcode;

pub use config::TranscodeConfig;
pub use emit::{format_glyph, shift_row, write_glyph, RowFormat};
pub use error::TranscodeError;
pub use glyph::{BoundingBox, GlyphRecord};
pub use header::GlyphHeader;
pub use lines::{LineReader, Scan};
pub use ranges::CellWidth;
pub use transcode::{transcode, TranscodeSummary, Transcoder};
