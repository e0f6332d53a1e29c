//! Tracing subscriber setup.
//!
//! Responsibilities:
//! - Install a stderr `fmt` subscriber before configuration is resolved.
//! - Apply the resolved config's log level once it is known.
//!
//! Invariants:
//! - `RUST_LOG`, when set and valid, takes precedence over the config's log level.
//! - Log output never goes to stdout, which is reserved for command output.

use anyhow::Context;
use qingcloud_config::LogLevel;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Handle used to apply the resolved log level after startup.
pub(crate) struct LogLevelHandle(Option<reload::Handle<LevelFilter, Registry>>);

/// Install the global subscriber.
///
/// Until [`LogLevelHandle::apply`] is called, the level is that of the
/// built-in default document.
pub(crate) fn init() -> LogLevelHandle {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return LogLevelHandle(None);
    }

    let (level, handle) = reload::Layer::new(LogLevel::default().as_level_filter());
    tracing_subscriber::registry()
        .with(level)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    LogLevelHandle(Some(handle))
}

impl LogLevelHandle {
    /// Switch the subscriber to `level`, unless `RUST_LOG` is in control.
    pub(crate) fn apply(&self, level: LogLevel) -> anyhow::Result<()> {
        if let Some(handle) = &self.0 {
            handle
                .reload(level.as_level_filter())
                .context("Failed to apply configured log level")?;
        }
        Ok(())
    }
}
