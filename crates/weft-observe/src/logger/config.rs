use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::object::{LogFormat, LogLevel};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Level filter expression (e.g. "info", "weft_core=debug,info").
    pub level: LogLevel,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output (text format only).
    pub use_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LogConfig {
    /// Whether colored output should actually be emitted: configured on and
    /// stdout is a terminal rather than a file or pipe.
    ///
    /// Checked at subscriber-install time, not at config-parse time, so
    /// redirection is detected accurately.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
