use crate::{
    fields::{scan_hex, scan_ints},
    header::malformed,
    CellWidth, LineReader, Scan, TranscodeConfig, TranscodeError, TranscodeSummary,
};
use anyhow::*;
use log::debug;
use std::io::BufRead;

/// The inked area of a glyph, relative to its origin on the baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: i64,
    pub height: i64,
    pub x_offset: i64,
    pub y_offset: i64,
}
impl BoundingBox {
    /// Parses the value of a `BBX` field.
    ///
    /// The flag is false when fewer than four numbers are present. Missing fields are zero.
    fn parse(value: &str) -> (BoundingBox, bool) {
        let ([width, height, x_offset, y_offset], count) = scan_ints::<4>(value);
        (BoundingBox { width, height, x_offset, y_offset }, count == 4)
    }
}

/// A single glyph read from the BDF stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRecord {
    pub code_point: i64,
    pub bbx: BoundingBox,
    pub cell_width: CellWidth,
    /// One value per `BITMAP` line, most significant bit leftmost.
    pub rows: Vec<u64>,
}
impl GlyphRecord {
    /// Reads the rest of a glyph after its `ENCODING` line.
    ///
    /// Lines before `BBX` and between `BBX` and `BITMAP` are skipped, and bitmap rows are read up
    /// to the next line starting with `END`. Returns `None` if the input ends before `BITMAP`. If
    /// it ends among the bitmap rows instead, the rows read so far are kept.
    pub fn read_body(
        lines: &mut LineReader<impl BufRead>,
        code_point: i64,
        cell_width: CellWidth,
        config: &TranscodeConfig,
        summary: &mut TranscodeSummary,
    ) -> Result<Option<GlyphRecord>> {
        let Scan::Found(line) = lines.scan_to("BBX ")? else {
            end_of_input(lines, code_point, "BBX", config, summary)?;
            return Ok(None);
        };
        let (bbx, complete) = BoundingBox::parse(&line["BBX ".len()..]);
        if !complete {
            malformed(config, summary, "BBX", &line)?;
        }

        if lines.scan_to("BITMAP")? == Scan::EndOfInput {
            end_of_input(lines, code_point, "BITMAP", config, summary)?;
            return Ok(None);
        }

        let mut rows = Vec::new();
        loop {
            let Some(line) = lines.next_line()? else {
                end_of_input(lines, code_point, "END", config, summary)?;
                break;
            };
            if line.starts_with("END") {
                break;
            }
            match scan_hex(&line) {
                Some(row) => rows.push(row),
                None => {
                    malformed(config, summary, "BITMAP", &line)?;
                    rows.push(0);
                }
            }
        }

        Ok(Some(GlyphRecord { code_point, bbx, cell_width, rows }))
    }
}

fn end_of_input(
    lines: &LineReader<impl BufRead>,
    code_point: i64,
    marker: &'static str,
    config: &TranscodeConfig,
    summary: &mut TranscodeSummary,
) -> Result<()> {
    if config.strict {
        return Err(TranscodeError::UnexpectedEof { code_point, marker }.into());
    }
    debug!(
        "Input ended after line {} looking for {marker} in glyph {code_point:04X}.",
        lines.line_no(),
    );
    summary.truncated += 1;
    Ok(())
}
