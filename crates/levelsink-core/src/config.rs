//! Logger configuration
//!
//! Nothing here is read from disk or the environment. `LoggerConfig` is a
//! plain serde type a host application can embed in its own settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LogResult;
use crate::filename::LogFileSpec;
use crate::gates::Gates;
use crate::logger::Logger;

/// Gate triples plus an optional log file target
///
/// # Example
///
/// ```
/// use levelsink_core::{Gates, LoggerConfig};
///
/// let config = LoggerConfig {
///     stdout: Gates::none(),
///     ..LoggerConfig::default()
/// };
/// assert_eq!(config.file, Gates::file_default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub stdout: Gates,
    pub file: Gates,
    pub file_target: Option<LogFileSpec>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            stdout: Gates::stdout_default(),
            file: Gates::file_default(),
            file_target: None,
        }
    }
}

impl LoggerConfig {
    pub fn with_file_target(mut self, spec: LogFileSpec) -> Self {
        self.file_target = Some(spec);
        self
    }

    /// Apply gates to `logger`, then open the file target if one is set
    ///
    /// Returns the opened log path, if any.
    pub fn apply(&self, logger: &Logger) -> LogResult<Option<PathBuf>> {
        logger.set_stdout_gates(self.stdout.info, self.stdout.debug, self.stdout.error);
        logger.set_file_gates(self.file.info, self.file.debug, self.file.error);

        match &self.file_target {
            Some(spec) => logger.init_file_logging(spec).map(Some),
            None => Ok(None),
        }
    }
}

impl Logger {
    /// Build a stdout logger configured by `config`
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        let logger = Logger::new();
        config.apply(&logger)?;
        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::sink::MemoryWriter;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_construction_policy() {
        let config = LoggerConfig::default();
        let logger = Logger::with_stdout(MemoryWriter::new());
        assert_eq!(config.stdout, logger.stdout_gates());
        assert_eq!(config.file, logger.file_gates());
        assert!(config.file_target.is_none());
    }

    #[test]
    fn test_apply_sets_gates_and_opens_file() {
        let dir = tempdir().unwrap();
        let out = MemoryWriter::new();
        let logger = Logger::with_stdout(out.clone());

        let config = LoggerConfig {
            stdout: Gates::none(),
            file: Gates::all(),
            file_target: None,
        }
        .with_file_target(LogFileSpec::new(dir.path(), "svc"));

        let path = config.apply(&logger).unwrap().unwrap();
        assert_eq!(path, dir.path().join("svc.log"));
        assert_eq!(logger.stdout_gates(), Gates::none());

        logger.debug(["to file"]);
        assert!(fs::read_to_string(&path).unwrap().contains("DEBUG:  to file"));
        assert!(!out.contents().contains("to file"));
    }

    #[test]
    fn test_apply_without_target() {
        let logger = Logger::with_stdout(MemoryWriter::new());
        let config = LoggerConfig {
            file: Gates::all(),
            ..LoggerConfig::default()
        };
        assert!(config.apply(&logger).unwrap().is_none());
        assert_eq!(logger.file_gates(), Gates::all());
        assert!(!logger.is_file_logging_enabled());
    }

    #[test]
    fn test_apply_reports_open_failure() {
        let dir = tempdir().unwrap();
        let logger = Logger::with_stdout(MemoryWriter::new());
        let config = LoggerConfig::default()
            .with_file_target(LogFileSpec::new(dir.path().join("missing"), "svc"));

        assert!(matches!(config.apply(&logger), Err(LogError::Open { .. })));
        assert!(!logger.is_file_logging_enabled());
    }

    #[test]
    fn test_yaml_document() {
        let yaml = r#"
stdout:
  info: false
  debug: true
  error: true
file_target:
  directory: /var/log/app
  prefix: worker
  append_date: true
"#;
        let config: LoggerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.stdout, Gates::new(false, true, true));
        assert_eq!(config.file, Gates::file_default());

        let target = config.file_target.unwrap();
        assert_eq!(target.prefix, "worker");
        assert_eq!(target.suffix, "");
        assert!(target.append_date);
    }
}
