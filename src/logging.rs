use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file or directory.
pub const LOG_ENV: &str = "ANYMORE_LOG";

/// File name used when `ANYMORE_LOG` points at a directory.
const DEFAULT_LOG_NAME: &str = "anymore.log";

/// Picks the file one pager run logs to.
///
/// `base` is either a file path or an existing directory, in which case the
/// log lands in `anymore.log` inside it. The run's pid and start time are
/// spliced in before the extension, so `/tmp/more.log` becomes
/// `/tmp/more-<pid>-<secs>.log` and pagers in a pipeline never share a file.
pub fn log_file_path(base: &Path, started: SystemTime, pid: u32) -> PathBuf {
    let base = if base.is_dir() {
        base.join(DEFAULT_LOG_NAME)
    } else {
        base.to_path_buf()
    };

    let secs = started
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let stem = base
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "anymore".to_string());
    let name = match base.extension() {
        Some(ext) => format!("{stem}-{pid}-{secs}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{pid}-{secs}"),
    };
    base.with_file_name(name)
}

/// Initialize tracing with optional file output.
///
/// Stdout carries the paged text, so nothing is logged unless `ANYMORE_LOG`
/// is set. `RUST_LOG` sets the filter (default `info`). Returns the file
/// being written, or `None` when logging is off.
pub fn init_tracing() -> io::Result<Option<PathBuf>> {
    let Some(base) = std::env::var_os(LOG_ENV) else {
        return Ok(None);
    };

    let path = log_file_path(Path::new(&base), SystemTime::now(), std::process::id());
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(fmt::time::uptime())
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(Some(path))
}
