mod config;
mod error;
mod init;
mod object;

pub use config::LogConfig;
pub use error::LogError;
pub use object::{LogFormat, LogLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Once installed, all `tracing` macros in the process emit through it.
/// Installing twice returns [`LogError::AlreadyInitialized`].
///
/// # Examples
/// ```rust
/// use weft_observe::{LogConfig, init_logging};
///
/// let cfg = LogConfig::default();
/// init_logging(&cfg).expect("logger init");
/// tracing::info!("ready");
/// ```
pub fn init_logging(cfg: &LogConfig) -> Result<(), LogError> {
    match cfg.format {
        LogFormat::Text => init::text(cfg),
        LogFormat::Json => init::json(cfg),
    }
}
