use crate::{CellWidth, GlyphHeader, GlyphRecord};
use log::trace;
use std::io::{self, Write};

const ZEROS: [u8; 64] = [b'0'; 64];

fn write_zeros(out: &mut impl Write, mut count: usize) -> io::Result<()> {
    while count > 0 {
        let chunk = count.min(ZEROS.len());
        out.write_all(&ZEROS[..chunk])?;
        count -= chunk;
    }
    Ok(())
}

/// The shape of one glyph in the output: rows per glyph and hex digits per row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowFormat {
    pub rows: usize,
    pub digits: usize,
}
impl RowFormat {
    pub fn new(header: &GlyphHeader, width: CellWidth) -> Self {
        let pixels = header.width as usize * width.cells() as usize;
        RowFormat { rows: header.height as usize, digits: pixels.div_ceil(4).max(1) }
    }

    /// Total number of hex digits after the `:`.
    pub fn payload_len(&self) -> usize {
        self.rows * self.digits
    }

    fn mask(&self) -> u64 {
        match self.digits {
            x if x >= 16 => !0,
            x => (1 << (x * 4)) - 1,
        }
    }

    fn write_row(&self, out: &mut impl Write, row: u64) -> io::Result<()> {
        match self.digits {
            x if x > 16 => {
                write_zeros(out, x - 16)?;
                write!(out, "{row:016X}")
            }
            x => write!(out, "{:0width$X}", row & self.mask(), width = x),
        }
    }

    fn write_blank(&self, out: &mut impl Write) -> io::Result<()> {
        write_zeros(out, self.digits)
    }
}

/// Moves a bitmap row right by `offset` pixels, or left for negative offsets.
///
/// Shifting by 64 or more pixels in either direction clears the row.
pub fn shift_row(row: u64, offset: i64) -> u64 {
    let amount = u32::try_from(offset.unsigned_abs()).unwrap_or(u32::MAX);
    let shifted = if offset >= 0 { row.checked_shr(amount) } else { row.checked_shl(amount) };
    shifted.unwrap_or(0)
}

/// Writes a glyph as a single `.hex` line, including the trailing newline.
///
/// Rows go to `out` one at a time, so the line is never held in memory as a whole.
pub fn write_glyph(
    out: &mut impl Write,
    glyph: &GlyphRecord,
    header: &GlyphHeader,
    descent: i64,
) -> io::Result<()> {
    let format = RowFormat::new(header, glyph.cell_width);
    write!(out, "{:04X}:", glyph.code_point)?;

    // blank rows above the top of the bounding box
    let start_row = descent.saturating_add(glyph.bbx.y_offset).saturating_add(glyph.bbx.height);
    let above =
        (format.rows as i64).saturating_sub(start_row).clamp(0, format.rows as i64) as usize;
    for _ in 0..above {
        format.write_blank(out)?;
    }

    let room = format.rows - above;
    if glyph.rows.len() > room {
        trace!(
            "Glyph {:04X}: dropping {} rows outside the cell",
            glyph.code_point,
            glyph.rows.len() - room,
        );
    }
    for &row in glyph.rows.iter().take(room) {
        format.write_row(out, shift_row(row, glyph.bbx.x_offset))?;
    }

    // pad out the bottom of the cell
    for _ in above + glyph.rows.len().min(room)..format.rows {
        format.write_blank(out)?;
    }

    out.write_all(b"\n")
}

/// Renders a glyph as a `.hex` line in memory. See [`write_glyph`].
pub fn format_glyph(glyph: &GlyphRecord, header: &GlyphHeader, descent: i64) -> String {
    let mut out = Vec::new();
    // writes into a Vec cannot fail
    let _ = write_glyph(&mut out, glyph, header, descent);
    String::from_utf8_lossy(&out).into_owned()
}
