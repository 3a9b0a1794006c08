//! Formatting macros
//!
//! `log_info!(logger, "...", args)` expands to
//! `logger.info_fmt(format_args!("...", args))`; the `_tagged` variants take a
//! label before the format string.

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info_tagged {
    ($logger:expr, $label:expr, $($arg:tt)*) => {
        $logger.info_tagged($label, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug_tagged {
    ($logger:expr, $label:expr, $($arg:tt)*) => {
        $logger.debug_tagged($label, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error_tagged {
    ($logger:expr, $label:expr, $($arg:tt)*) => {
        $logger.error_tagged($label, format_args!($($arg)*))
    };
}

/// Log and exit the process; see [`Logger::fatal`](crate::Logger::fatal)
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal_tagged {
    ($logger:expr, $label:expr, $($arg:tt)*) => {
        $logger.fatal_tagged($label, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_init {
    ($logger:expr, $($arg:tt)*) => {
        $logger.init_msg_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Logger, MemoryWriter};

    #[test]
    fn test_format_macros() {
        let out = MemoryWriter::new();
        let logger = Logger::with_stdout(out.clone());
        logger.set_stdout_gates(true, true, true);

        log_info!(logger, "This is INFO-{}", 2);
        log_debug!(logger, "This is DEBUG-{}", 2);
        log_error!(logger, "This is ERROR-{}", 2);
        log_init!(logger, "build {}", "abc123");

        let lines = out.lines();
        assert!(lines[0].ends_with(" INFO:  This is INFO-2"));
        assert!(lines[1].ends_with(" DEBUG:  This is DEBUG-2"));
        assert!(lines[2].ends_with(" ERROR:  This is ERROR-2"));
        assert!(lines[3].ends_with(" INIT:  build abc123"));
    }

    #[test]
    fn test_tagged_macros() {
        let out = MemoryWriter::new();
        let logger = Logger::with_stdout(out.clone());
        logger.set_stdout_gates(true, true, true);

        let method = String::from("Method-1");
        log_info_tagged!(logger, &method, "step {} of {}", 1, 3);
        log_debug_tagged!(logger, "Method-2", "payload={:?}", [1, 2]);
        log_error_tagged!(logger, "Handler", "failed with code {}", 42);

        let lines = out.lines();
        assert!(lines[0].ends_with(" INFO: [Method-1] [step 1 of 3]"));
        assert!(lines[1].ends_with(" DEBUG: [Method-2] [payload=[1, 2]]"));
        assert!(lines[2].ends_with(" ERROR: [Handler] [failed with code 42]"));
    }
}
