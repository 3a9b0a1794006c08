//! Severity levels

/// Log levels
///
/// `Info`, `Debug` and `Error` are gated per sink. `Fatal` and `Init` bypass
/// the gate triples entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Debug,
    Error,
    Fatal,
    Init,
}

impl Level {
    /// Name rendered in front of every line
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Init => "INIT",
        }
    }

    /// Whether emission at this level consults the gate triples
    pub fn is_gated(&self) -> bool {
        matches!(self, Level::Info | Level::Debug | Level::Error)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
