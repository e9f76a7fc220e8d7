use crate::{fields::scan_ints, LineReader, TranscodeConfig, TranscodeError, TranscodeSummary};
use anyhow::*;
use log::{debug, info};
use std::io::BufRead;

/// Grid dimensions shared by every glyph of a font.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphHeader {
    /// Width of a single cell in pixels.
    pub width: u32,
    /// Height of every cell in pixels.
    pub height: u32,
}
impl GlyphHeader {
    /// The header used when the font specifies neither dimension.
    pub fn from_config(config: &TranscodeConfig) -> Self {
        GlyphHeader { width: config.default_width, height: config.default_height }
    }

    /// Reads the font header, up to and including the first `STARTCHAR` line.
    ///
    /// `DWIDTH` sets the cell width and the second number of `FONTBOUNDINGBOX` the cell height.
    /// Later occurrences override earlier ones, and values that aren't positive leave the
    /// configured defaults in place.
    pub fn read(
        lines: &mut LineReader<impl BufRead>,
        config: &TranscodeConfig,
        summary: &mut TranscodeSummary,
    ) -> Result<Self> {
        let mut dwidth = 0;
        let mut font_height = 0;

        while let Some(line) = lines.next_line()? {
            if let Some(rest) = line.strip_prefix("DWIDTH ") {
                match scan_ints::<1>(rest) {
                    ([width], 1) => dwidth = width,
                    _ => malformed(config, summary, "DWIDTH", &line)?,
                }
            } else if let Some(rest) = line.strip_prefix("FONTBOUNDINGBOX ") {
                match scan_ints::<2>(rest) {
                    ([_, height], 2) => font_height = height,
                    _ => malformed(config, summary, "FONTBOUNDINGBOX", &line)?,
                }
            } else if line.starts_with("STARTCHAR") {
                break;
            }
        }

        let mut header = GlyphHeader::from_config(config);
        if let Some(width) = positive(dwidth) {
            header.width = width;
        }
        if let Some(height) = positive(font_height) {
            header.height = height;
        }

        info!("Glyph height set to {}", header.height);
        info!("Normal glyph width set to {}", header.width);
        Ok(header)
    }
}

fn positive(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|x| *x > 0)
}

pub(crate) fn malformed(
    config: &TranscodeConfig,
    summary: &mut TranscodeSummary,
    field: &'static str,
    line: &str,
) -> Result<()> {
    if config.strict {
        return Err(TranscodeError::MalformedField { field, line: line.to_string() }.into());
    }
    debug!("Ignoring malformed {field} field: {line:?}");
    summary.malformed_fields += 1;
    Ok(())
}
