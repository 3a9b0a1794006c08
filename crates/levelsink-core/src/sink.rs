//! Line-oriented sinks
//!
//! A [`LineWriter`] stamps every line with the local date and time before
//! handing it to the underlying writer, in one `write_all` per line so that a
//! line is never split across writes.

use std::io::{self, Write};
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;

/// Prefix layout written in front of every line, e.g. `2024/03/05 14:02:11`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writer that prefixes each line with a timestamp and flushes after it
#[derive(Debug)]
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `body` as one timestamped line
    ///
    /// Trailing newlines in `body` are collapsed so every call produces
    /// exactly one line.
    pub fn write_line(&mut self, body: &str) -> io::Result<()> {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut line = format!("{} {}", stamp, body.trim_end_matches(['\r', '\n']));
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// In-memory writer for capturing log output
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`Logger`](crate::Logger) while another is kept to inspect what was
/// written.
///
/// # Example
///
/// ```
/// use levelsink_core::{Logger, MemoryWriter};
///
/// let out = MemoryWriter::new();
/// let logger = Logger::with_stdout(out.clone());
/// logger.info(["ready"]);
/// assert!(out.contents().contains("INFO:  ready"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
