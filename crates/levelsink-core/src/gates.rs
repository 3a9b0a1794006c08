//! Per-sink gate triples

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Which of the gated levels a sink accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gates {
    pub info: bool,
    pub debug: bool,
    pub error: bool,
}

impl Gates {
    pub const fn new(info: bool, debug: bool, error: bool) -> Self {
        Self { info, debug, error }
    }

    /// Stdout policy of a freshly constructed logger: info and error, no debug
    pub const fn stdout_default() -> Self {
        Self::new(true, false, true)
    }

    /// File policy of a freshly constructed logger: errors only
    pub const fn file_default() -> Self {
        Self::new(false, false, true)
    }

    pub const fn all() -> Self {
        Self::new(true, true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    /// Whether a line at `level` passes this gate triple
    ///
    /// Ungated levels (`Fatal`, `Init`) always pass.
    pub fn allows(&self, level: Level) -> bool {
        match level {
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Error => self.error,
            Level::Fatal | Level::Init => true,
        }
    }
}
