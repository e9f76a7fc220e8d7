use anyhow::*;
use std::io::{BufRead, Read};

/// The outcome of scanning forward for a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scan {
    /// The first line that matched, with its line ending removed.
    Found(String),
    /// The input ran out before any line matched.
    EndOfInput,
}

/// Reads a text stream one line at a time, truncating overlong lines.
pub struct LineReader<R> {
    inner: R,
    max_len: usize,
    line_no: usize,
    buf: Vec<u8>,
}
impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        LineReader { inner, max_len, line_no: 0, buf: Vec::new() }
    }

    /// The 1-based number of the line most recently returned.
    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    /// Returns the next line, or `None` at the end of the input.
    ///
    /// The line ending (`\n` or `\r\n`) is stripped. Bytes past `max_len` are dropped without
    /// being buffered, and invalid UTF-8 is replaced.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let limit = (self.max_len as u64).saturating_add(1);
        if (&mut self.inner).take(limit).read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        if self.buf.last() != Some(&b'\n') {
            self.skip_rest_of_line()?;
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        self.buf.truncate(self.max_len);
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn skip_rest_of_line(&mut self) -> Result<()> {
        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.inner.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.inner.consume(len);
                }
            }
        }
    }

    /// Discards lines until one satisfies `pred`.
    pub fn scan_until(&mut self, mut pred: impl FnMut(&str) -> bool) -> Result<Scan> {
        while let Some(line) = self.next_line()? {
            if pred(&line) {
                return Ok(Scan::Found(line));
            }
        }
        Ok(Scan::EndOfInput)
    }

    /// Discards lines until one starts with `prefix`.
    pub fn scan_to(&mut self, prefix: &str) -> Result<Scan> {
        self.scan_until(|line| line.starts_with(prefix))
    }
}
