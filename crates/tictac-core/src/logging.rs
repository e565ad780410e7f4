use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "tictac.log";
const LOG_RETENTION_DAYS: u64 = 7;

/// Directory the game writes its log files into.
///
/// `TICTAC_LOG_DIR` wins when set. Otherwise macOS uses
/// `~/Library/Logs/tictac` and other platforms use `tictac/logs` under the
/// user data dir. `./logs` is the last resort when no home is known.
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TICTAC_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("tictac");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("tictac").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Delete `tictac.log.*` files last modified more than `max_age_days` ago.
fn cleanup_old_logs(log_path: &Path, max_age_days: u64) {
    let cutoff = SystemTime::now() - Duration::from_secs(max_age_days * 86400);
    let Ok(entries) = std::fs::read_dir(log_path) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with(LOG_FILE_PREFIX) {
            continue;
        }
        let modified = entry.metadata().and_then(|meta| meta.modified());
        if matches!(modified, Ok(modified) if modified < cutoff) {
            let _ = std::fs::remove_file(entry.path());
        }
    }
}

/// Install the global subscriber. Call once, before the terminal is taken over.
///
/// Events go to a daily file in [`log_dir`] and never to the screen, which
/// the game owns. `TICTAC_LOG`, then `RUST_LOG`, pick the filter; `info`
/// otherwise.
pub fn init() {
    let filter = EnvFilter::try_from_env("TICTAC_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if let Err(err) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "tictac: cannot create {}: {err}; logging may be lost",
            log_path.display()
        );
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, LOG_FILE_PREFIX);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
