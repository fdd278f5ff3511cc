use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LogConfig,
    error::{LogError, LogResult},
    object::UtcTimer,
};

/// Installs the human-readable text subscriber.
pub fn text(cfg: &LogConfig) -> LogResult<()> {
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(UtcTimer);

    install(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

/// Installs the structured JSON subscriber.
pub fn json(cfg: &LogConfig) -> LogResult<()> {
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(UtcTimer);

    install(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

fn install<S>(subscriber: S) -> LogResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)
}
