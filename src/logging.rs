//! Tracing initialization for native hosts and tests.
//!
//! The browser host wires `tracing` into the console on its own; this
//! module serves the native shells and the test suites. Output goes to
//! stderr at the configured level, optionally mirrored at DEBUG level into
//! a session log file under the user cache directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use time::UtcOffset;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{self, EnvFilter, fmt, prelude::*};

const LOG_RETENTION_DAYS: u64 = 7;

/// Session log directory inside the user-specific OS cache directory,
/// e.g. `~/.cache/ram-webgui/ram-editor-core/` on Linux.
pub fn default_log_dir() -> io::Result<PathBuf> {
    let mut dir = dirs::cache_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "unable to determine user cache directory",
        )
    })?;
    dir.push("ram-webgui");
    dir.push("ram-editor-core");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Delete session logs older than [`LOG_RETENTION_DAYS`].
fn cleanup_old_logs(dir: &Path) {
    let now = std::time::SystemTime::now();
    let retention = std::time::Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let is_session_log = metadata.is_file()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("session-") && name.ends_with(".log"));
        if !is_session_log {
            continue;
        }
        let expired = metadata
            .modified()
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .is_some_and(|age| age > retention);
        if expired {
            if let Err(e) = fs::remove_file(entry.path()) {
                eprintln!("failed to remove old log file {:?}: {}", entry.path(), e);
            }
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Stderr logs at `log_level` when given, otherwise at `RUST_LOG` or
/// `info`. With a `log_dir` (usually [`default_log_dir`]), a
/// `session-<timestamp>-<pid>.log` file additionally captures DEBUG-level
/// output through a non-blocking writer; the returned guard must stay
/// alive for the session. A subscriber that is already set is not an
/// error, so tests can call this repeatedly.
pub fn init_logger(
    no_color: bool,
    log_level: Option<&str>,
    log_dir: Option<&Path>,
) -> io::Result<WorkerGuard> {
    let timer = fmt::time::OffsetTime::new(
        UtcOffset::UTC,
        format_description!(
            "[[[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z]"
        ),
    );

    let stderr_filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(timer.clone())
        .with_ansi(!no_color)
        .with_filter(stderr_filter);

    let (file_layer, guard) = if let Some(dir) = log_dir {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        cleanup_old_logs(dir);

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::parse(
                "[year][month][day]-[hour][minute][second]",
            ).expect("static format description"))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let log_path = dir.join(format!("session-{}-{}.log", timestamp, std::process::id()));

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_timer(timer)
            .with_ansi(false)
            .with_filter(EnvFilter::new("debug"));
        (Some(layer), guard)
    } else {
        let (_, guard) = tracing_appender::non_blocking(std::io::sink());
        (None, guard)
    };

    let result = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    match result {
        Ok(()) => Ok(guard),
        // A subscriber installed by an earlier call (or by the test
        // harness) stays in place.
        Err(e) if e.to_string().contains("already been set") => Ok(guard),
        Err(e) => Err(io::Error::new(io::ErrorKind::Other, e)),
    }
}
