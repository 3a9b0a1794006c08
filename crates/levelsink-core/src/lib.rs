//! Levelsink Core
//!
//! A leveled logger that routes every diagnostic line of an application to
//! standard output and, optionally, an append-only log file. Each destination
//! has its own gate triple deciding whether info, debug and error lines reach
//! it; fatal and init lines bypass the gates.
//!
//! ## Line format
//!
//! ```text
//! 2024/03/05 14:02:11 INFO:  service started
//! 2024/03/05 14:02:11 ERROR: [Handler] [failed with code 42]
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use levelsink_core::{log_info, Logger, LogFileSpec};
//!
//! let logger = Logger::new();
//! logger.set_file_gates(true, true, true);
//! if let Err(e) = logger.init_file_logging(&LogFileSpec::new("/var/log", "app").with_date(true)) {
//!     logger.fatal_fmt(format_args!("cannot open log file: {}", e));
//! }
//!
//! log_info!(logger, "listening on {}", 8080);
//! logger.release();
//! ```

pub mod level;
pub mod gates;
pub mod filename;
pub mod sink;
pub mod error;
pub mod config;
pub mod logger;
pub mod bridge;
mod macros;

pub use level::Level;
pub use gates::Gates;
pub use filename::LogFileSpec;
pub use sink::{LineWriter, MemoryWriter, TIMESTAMP_FORMAT};
pub use error::{LogError, LogResult};
pub use config::LoggerConfig;
pub use logger::{Logger, FATAL_EXIT_CODE};
