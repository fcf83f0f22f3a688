//! Tracing setup for the bot process. Every event is written to stdout and to the log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime, writer::MakeWriterExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "info";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock local time, matching the timestamps stored in the chat log.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Opens `path` for appending. Missing parent directories are created.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber.
///
/// Lines look like `2024-05-01 12:00:00  INFO handlers::router: message key=value`.
/// The filter comes from `RUST_LOG` and falls back to `info`. The file copy carries no ANSI codes.
pub fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
    let file = open_log_file(log_file)
        .with_context(|| format!("Open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(Arc::new(file)))
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Install global tracing subscriber")
}
