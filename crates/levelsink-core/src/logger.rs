//! The leveled two-sink logger
//!
//! A [`Logger`] owns a stdout sink (always present) and an optional
//! append-only file sink. Every `info`/`debug`/`error` call is checked against
//! two independent gate triples, one per sink. `fatal` and `init_msg` ignore
//! the gates; `fatal` additionally terminates the process.
//!
//! # Thread Safety
//!
//! Gates and sinks share one `parking_lot::Mutex`. Each call takes the lock
//! once, so lines from concurrent callers never interleave and a gate change
//! is seen by the next call.
//!
//! # Write failures
//!
//! Failed writes on an open sink are not retried and not returned to the
//! caller. They are counted instead, see [`Logger::write_failures`].

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{LogError, LogResult};
use crate::filename::LogFileSpec;
use crate::gates::Gates;
use crate::level::Level;
use crate::sink::LineWriter;

/// Exit status used when a fatal message terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

#[cfg(unix)]
const LOG_FILE_MODE: u32 = 0o666;

type StdoutWriter = Box<dyn Write + Send>;

/// The file side of a logger once file logging is initialised
///
/// `writer` becomes `None` after release; the sink itself is never replaced.
struct FileSink {
    path: PathBuf,
    writer: Option<LineWriter<File>>,
}

impl FileSink {
    fn close(&mut self) -> bool {
        match self.writer.take() {
            Some(mut writer) => {
                let _ = writer.flush();
                let _ = writer.into_inner().sync_all();
                true
            }
            None => false,
        }
    }
}

struct State {
    stdout: LineWriter<StdoutWriter>,
    file: Option<FileSink>,
    stdout_gates: Gates,
    file_gates: Gates,
    write_failures: u64,
}

impl State {
    fn accepts(&self, level: Level) -> bool {
        self.stdout_gates.allows(level) || (self.file.is_some() && self.file_gates.allows(level))
    }

    /// Write one rendered line to every sink whose gate admits `level`
    ///
    /// The file and stdout checks are independent; neither short-circuits the
    /// other.
    fn emit(&mut self, level: Level, body: &str) {
        if self.file_gates.allows(level) {
            let failed = match self.file.as_mut().and_then(|f| f.writer.as_mut()) {
                Some(writer) => writer.write_line(body).is_err(),
                None => false,
            };
            if failed {
                self.write_failures += 1;
            }
        }

        if self.stdout_gates.allows(level) && self.stdout.write_line(body).is_err() {
            self.write_failures += 1;
        }
    }
}

fn render_plain(level: Level, message: &str) -> String {
    format!("{}:  {}", level, message)
}

fn render_tagged(level: Level, label: &str, message: fmt::Arguments<'_>) -> String {
    format!("{}: [{}] [{}]", level, label, message)
}

fn join_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for part in parts {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(part.as_ref());
    }
    joined
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }
    options.open(path)
}

/// Leveled logger writing to stdout and, once initialised, a log file
///
/// # Example
///
/// ```no_run
/// use levelsink_core::{log_error_tagged, Logger, LogFileSpec};
///
/// let logger = Logger::new();
/// logger.set_file_gates(true, true, true);
/// if let Err(e) = logger.init_file_logging(&LogFileSpec::new("/var/log", "app").with_date(true)) {
///     logger.error_fmt(format_args!("continuing without a log file: {}", e));
/// }
///
/// logger.info(["service", "started"]);
/// log_error_tagged!(logger, "Handler", "failed with code {}", 42);
/// logger.release();
/// ```
pub struct Logger {
    state: Mutex<State>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger bound to the process's standard output
    ///
    /// Stdout gates start as (info, no debug, error); file gates as errors
    /// only. File logging stays off until [`init_file_logging`] succeeds.
    ///
    /// [`init_file_logging`]: Self::init_file_logging
    pub fn new() -> Self {
        Self::with_stdout(io::stdout())
    }

    /// Create a logger whose "stdout" sink is an arbitrary writer
    pub fn with_stdout<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            state: Mutex::new(State {
                stdout: LineWriter::new(Box::new(writer)),
                file: None,
                stdout_gates: Gates::stdout_default(),
                file_gates: Gates::file_default(),
                write_failures: 0,
            }),
        }
    }

    /// Replace the stdout gate triple
    pub fn set_stdout_gates(&self, info: bool, debug: bool, error: bool) {
        self.state.lock().stdout_gates = Gates::new(info, debug, error);
    }

    /// Replace the file gate triple
    ///
    /// Has no visible effect until file logging is initialised.
    pub fn set_file_gates(&self, info: bool, debug: bool, error: bool) {
        self.state.lock().file_gates = Gates::new(info, debug, error);
    }

    pub fn stdout_gates(&self) -> Gates {
        self.state.lock().stdout_gates
    }

    pub fn file_gates(&self) -> Gates {
        self.state.lock().file_gates
    }

    /// Open the log file described by `spec` and start writing to it
    ///
    /// The file is opened for append (created if missing, never truncated)
    /// under today's local date. On success an INIT line naming the resolved
    /// path is written to both sinks and the path is returned. On failure the
    /// logger is left exactly as it was.
    pub fn init_file_logging(&self, spec: &LogFileSpec) -> LogResult<PathBuf> {
        self.open_file_at(spec.resolve_path())
    }

    /// Like [`init_file_logging`](Self::init_file_logging) with an explicit path
    pub fn open_file_at(&self, path: impl Into<PathBuf>) -> LogResult<PathBuf> {
        let path = path.into();
        let mut state = self.state.lock();

        if let Some(existing) = &state.file {
            return Err(LogError::AlreadyInitialized {
                path: existing.path.clone(),
            });
        }

        let file = open_append(&path).map_err(|e| LogError::open(&path, e))?;
        state.file = Some(FileSink {
            path: path.clone(),
            writer: Some(LineWriter::new(file)),
        });

        let body = render_plain(Level::Init, &format!("Logging to file: {}", path.display()));
        state.emit(Level::Init, &body);

        Ok(path)
    }

    /// Whether file logging was successfully initialised
    ///
    /// Stays true after [`release`](Self::release).
    pub fn is_file_logging_enabled(&self) -> bool {
        self.state.lock().file.is_some()
    }

    /// Whether the log file is initialised and not yet released
    pub fn is_file_open(&self) -> bool {
        self.state
            .lock()
            .file
            .as_ref()
            .map_or(false, |f| f.writer.is_some())
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.state.lock().file.as_ref().map(|f| f.path.clone())
    }

    /// Number of line writes that failed on an open sink
    pub fn write_failures(&self) -> u64 {
        self.state.lock().write_failures
    }

    /// Flush and close the log file
    ///
    /// A no-op when no file was opened or the file was already released.
    /// Returns whether a file was actually closed by this call.
    pub fn release(&self) -> bool {
        let mut state = self.state.lock();
        let _ = state.stdout.flush();
        state.file.as_mut().map_or(false, FileSink::close)
    }

    /// Flush both sinks without closing anything
    pub fn flush(&self) {
        let mut state = self.state.lock();
        let _ = state.stdout.flush();
        if let Some(writer) = state.file.as_mut().and_then(|f| f.writer.as_mut()) {
            let _ = writer.flush();
        }
    }

    pub(crate) fn accepts(&self, level: Level) -> bool {
        self.state.lock().accepts(level)
    }

    // Rendering runs user Display impls, which may log through this same
    // logger, so the lock is never held while a line is being rendered.

    fn emit_plain(&self, level: Level, message: &str) {
        if self.accepts(level) {
            let body = render_plain(level, message);
            self.state.lock().emit(level, &body);
        }
    }

    pub(crate) fn emit_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.accepts(level) {
            let body = render_plain(level, &args.to_string());
            self.state.lock().emit(level, &body);
        }
    }

    pub(crate) fn emit_tagged(&self, level: Level, label: &str, args: fmt::Arguments<'_>) {
        if self.accepts(level) {
            let body = render_tagged(level, label, args);
            self.state.lock().emit(level, &body);
        }
    }

    /// `body` is rendered by the caller before the lock is taken
    fn terminate(&self, body: String) -> ! {
        {
            let mut state = self.state.lock();
            state.emit(Level::Fatal, &body);
            if let Some(file) = state.file.as_mut() {
                file.close();
            }
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    // Info

    /// Log informational parts joined by spaces
    pub fn info<I, S>(&self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.emit_plain(Level::Info, &join_parts(parts));
    }

    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Info, args);
    }

    /// Log an informational message rendered as `INFO: [label] [message]`
    pub fn info_tagged(&self, label: &str, args: fmt::Arguments<'_>) {
        self.emit_tagged(Level::Info, label, args);
    }

    // Debug

    pub fn debug<I, S>(&self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.emit_plain(Level::Debug, &join_parts(parts));
    }

    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Debug, args);
    }

    pub fn debug_tagged(&self, label: &str, args: fmt::Arguments<'_>) {
        self.emit_tagged(Level::Debug, label, args);
    }

    // Error

    pub fn error<I, S>(&self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.emit_plain(Level::Error, &join_parts(parts));
    }

    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Error, args);
    }

    pub fn error_tagged(&self, label: &str, args: fmt::Arguments<'_>) {
        self.emit_tagged(Level::Error, label, args);
    }

    // Fatal

    /// Log to every available sink, ignoring gates, then exit the process
    ///
    /// The log file is synced and closed before exiting with
    /// [`FATAL_EXIT_CODE`]. Never returns.
    pub fn fatal<I, S>(&self, parts: I) -> !
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terminate(render_plain(Level::Fatal, &join_parts(parts)))
    }

    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(render_plain(Level::Fatal, &args.to_string()))
    }

    pub fn fatal_tagged(&self, label: &str, args: fmt::Arguments<'_>) -> ! {
        self.terminate(render_tagged(Level::Fatal, label, args))
    }

    // Init

    /// Log a lifecycle milestone to every available sink, ignoring gates
    pub fn init_msg<I, S>(&self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.emit_plain(Level::Init, &join_parts(parts));
    }

    pub fn init_msg_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Init, args);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("stdout_gates", &state.stdout_gates)
            .field("file_gates", &state.file_gates)
            .field("file_path", &state.file.as_ref().map(|sink| &sink.path))
            .field(
                "file_open",
                &state.file.as_ref().map_or(false, |sink| sink.writer.is_some()),
            )
            .finish()
    }
}
