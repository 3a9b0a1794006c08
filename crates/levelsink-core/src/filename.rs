//! Log file naming
//!
//! File names are composed as `<prefix>[_<YYYY-MM-DD>]<suffix>.log` and joined
//! onto the target directory.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_SEPARATOR: char = '_';
const LOG_EXTENSION: &str = ".log";

/// Where and under which name a log file is opened
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use levelsink_core::LogFileSpec;
///
/// let spec = LogFileSpec::new("/var/log", "app").with_date(true);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(spec.file_name_for(date), "app_2024-03-05.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFileSpec {
    pub directory: PathBuf,
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub append_date: bool,
}

impl LogFileSpec {
    /// Spec for `<directory>/<prefix>.log`
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
            suffix: String::new(),
            append_date: false,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_date(mut self, append_date: bool) -> Self {
        self.append_date = append_date;
        self
    }

    /// File name (without directory) the log would get on `date`
    ///
    /// The date segment never introduces a second separator: stray `_` or `.`
    /// around the formatted date are dropped, and no `_` is inserted when the
    /// prefix already ends with one.
    pub fn file_name_for(&self, date: NaiveDate) -> String {
        let mut name = self.prefix.clone();
        if self.append_date {
            let stamp = date.format(DATE_FORMAT).to_string();
            let stamp = stamp.trim_matches(|c| c == DATE_SEPARATOR || c == '.');
            if !name.ends_with(DATE_SEPARATOR) {
                name.push(DATE_SEPARATOR);
            }
            name.push_str(stamp);
        }
        name.push_str(&self.suffix);
        name.push_str(LOG_EXTENSION);
        name
    }

    /// Full path the log would get on `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.directory.join(self.file_name_for(date))
    }

    /// Full path using today's local date
    pub fn resolve_path(&self) -> PathBuf {
        self.path_for(Local::now().date_naive())
    }
}
