//! `log` facade backend
//!
//! Lets a [`Logger`] receive records from `log::info!` and friends. Records are
//! rendered in the tagged shape with the record target as the label.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::level::Level;
use crate::logger::Logger;

/// Map a facade level onto the three gated levels
///
/// There is no warn gate; warnings travel with errors.
pub fn level_for(level: log::Level) -> Level {
    match level {
        log::Level::Error | log::Level::Warn => Level::Error,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.accepts(level_for(metadata.level()))
    }

    fn log(&self, record: &Record) {
        self.emit_tagged(level_for(record.level()), record.target(), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

impl Logger {
    /// Install this logger as the process-wide `log` backend
    ///
    /// The logger moves into the facade, so set its gates and open its file
    /// first. Fails if another backend is already set.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(LevelFilter::Trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemoryWriter;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(log::Level::Error), Level::Error);
        assert_eq!(level_for(log::Level::Warn), Level::Error);
        assert_eq!(level_for(log::Level::Info), Level::Info);
        assert_eq!(level_for(log::Level::Debug), Level::Debug);
        assert_eq!(level_for(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_records_render_tagged() {
        let out = MemoryWriter::new();
        let logger = Logger::with_stdout(out.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("peer {} dropped", 7))
                .level(log::Level::Warn)
                .target("net")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("not shown"))
                .level(log::Level::Trace)
                .target("net")
                .build(),
        );

        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" ERROR: [net] [peer 7 dropped]"));
    }

    #[test]
    fn test_enabled_follows_gates() {
        let logger = Logger::with_stdout(MemoryWriter::new());
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let info = Metadata::builder().level(log::Level::Info).build();

        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&info));

        logger.set_stdout_gates(false, true, false);
        assert!(logger.enabled(&debug));
        assert!(!logger.enabled(&info));
    }
}
