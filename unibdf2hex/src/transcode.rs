use crate::{
    fields::scan_int,
    header::malformed,
    ranges::{block_name, classify},
    write_glyph, CellWidth, GlyphHeader, GlyphRecord, LineReader, Scan, TranscodeConfig,
};
use anyhow::*;
use log::{debug, trace};
use std::io::{BufRead, BufWriter, Write};

/// Counters collected over a conversion run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscodeSummary {
    /// Number of `ENCODING` lines encountered.
    pub glyphs_seen: usize,
    pub emitted_wide: usize,
    pub emitted_normal: usize,
    /// Glyphs whose code point is outside of every converted range.
    pub skipped: usize,
    /// Glyphs cut short by the end of the input.
    pub truncated: usize,
    pub malformed_fields: usize,
}
impl TranscodeSummary {
    pub fn emitted(&self) -> usize {
        self.emitted_wide + self.emitted_normal
    }

    /// Prints statistics about the run using the `log` crate.
    pub fn print_statistics(&self) {
        debug!("");
        debug!("==================================================================");
        debug!("Statistics");
        debug!("==================================================================");
        debug!("Glyphs Found     : {}", self.glyphs_seen);
        debug!("Glyphs Written   : {} ({} wide)", self.emitted(), self.emitted_wide);
        debug!("Out of Range     : {}", self.skipped);
        debug!("Truncated        : {}", self.truncated);
        debug!("Malformed Fields : {}", self.malformed_fields);
        debug!("==================================================================");
        debug!("");
    }
}

/// Converts a BDF stream into `.hex` lines in one pass.
pub struct Transcoder<R, W> {
    lines: LineReader<R>,
    out: W,
    config: TranscodeConfig,
    summary: TranscodeSummary,
}
impl<R: BufRead, W: Write> Transcoder<R, W> {
    pub fn new(input: R, out: W, config: &TranscodeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Transcoder {
            lines: LineReader::new(input, config.max_line_len),
            out,
            config: *config,
            summary: TranscodeSummary::default(),
        })
    }

    /// Runs the conversion to the end of the input.
    pub fn run(mut self) -> Result<TranscodeSummary> {
        let header = GlyphHeader::read(&mut self.lines, &self.config, &mut self.summary)?;

        while let Scan::Found(line) = self.lines.scan_to("ENCODING ")? {
            self.summary.glyphs_seen += 1;

            let Some(code_point) = self.parse_encoding(&line)? else {
                continue;
            };
            let Some(cell_width) = classify(code_point, &self.config) else {
                trace!("Skipping glyph {code_point:04X} ({})", block_name(code_point));
                self.summary.skipped += 1;
                continue;
            };

            let glyph = GlyphRecord::read_body(
                &mut self.lines,
                code_point,
                cell_width,
                &self.config,
                &mut self.summary,
            )?;
            match glyph {
                Some(glyph) => self.emit(&glyph, &header)?,
                None => break,
            }
        }

        self.out.flush()?;
        Ok(self.summary)
    }

    fn parse_encoding(&mut self, line: &str) -> Result<Option<i64>> {
        match scan_int(&line["ENCODING ".len()..]) {
            Some((code_point, _)) => Ok(Some(code_point)),
            None => {
                malformed(&self.config, &mut self.summary, "ENCODING", line)?;
                Ok(None)
            }
        }
    }

    fn emit(&mut self, glyph: &GlyphRecord, header: &GlyphHeader) -> Result<()> {
        trace!(
            "Writing glyph {:04X} ({}, {:?})",
            glyph.code_point,
            block_name(glyph.code_point),
            glyph.cell_width,
        );
        write_glyph(&mut self.out, glyph, header, self.config.descent)?;
        match glyph.cell_width {
            CellWidth::Wide => self.summary.emitted_wide += 1,
            CellWidth::Normal => self.summary.emitted_normal += 1,
        }
        Ok(())
    }
}

/// Converts the BDF font read from `input` and writes the `.hex` lines to `output`.
pub fn transcode(
    input: impl BufRead,
    output: impl Write,
    config: &TranscodeConfig,
) -> Result<TranscodeSummary> {
    Transcoder::new(input, BufWriter::new(output), config)?.run()
}
