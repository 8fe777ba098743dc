use std::{env, fs, path::Path};

use anyhow::Context as _;
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{Layer as _, filter, fmt, prelude::*};

pub const LOG_FILE: &str = "designdrill.log";
pub const LOG_LEVEL_ENV: &str = "DESIGNDRILL_LOG";

/// Installs the global subscriber, appending to `log_dir/designdrill.log`.
///
/// The terminal belongs to the UI, so nothing is logged to stdout or stderr.
pub fn init(log_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))?;

    let subscriber = tracing_subscriber::Registry::default().with(
        fmt::Layer::new()
            .with_ansi(false)
            .with_target(true)
            .with_writer(appender)
            .with_filter(level_from_env())
            .with_filter(filter::filter_fn(|metadata| {
                is_own_target(metadata.target())
            })),
    );
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the log subscriber")?;
    Ok(())
}

fn level_from_env() -> LevelFilter {
    parse_level(env::var(LOG_LEVEL_ENV).ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::INFO)
}

fn is_own_target(target: &str) -> bool {
    target.starts_with("drill_") || target.starts_with("designdrill")
}
