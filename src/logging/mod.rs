//! Diagnostics and the transition log.
//!
//! The terminal owns stdout, so `tracing` output goes to a file in the
//! configured log directory when logging is enabled. Independently of
//! tracing, [`SessionLogger`] appends every broadcast session record to a
//! daily `session_<date>.log` file, one line per transition.

use crate::config::LoggingConfig;
use crate::session::state::SessionState;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
fn expand_dir(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

/// Install a file-backed tracing subscriber. No-op when logging is
/// disabled. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dir = expand_dir(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("sessiontui.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("tracing initialized");
    Ok(())
}

/// Appends each broadcast session record to a daily log file.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. A file that cannot be created is skipped silently; the log is
/// diagnostics, not state.
pub struct SessionLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, Option<fs::File>>,
}

impl SessionLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: expand_dir(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    /// Write one line describing the post-transition record. No-op if
    /// logging is disabled.
    pub fn log_transition(&mut self, state: &SessionState) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let filename = format!("session_{}.log", now.format("%Y-%m-%d"));
        let line = format!(
            "[{}] logged_in={} username={:?} email={:?}",
            now.format("%H:%M:%S"),
            state.logged_in,
            state.username,
            state.email,
        );

        let log_dir = self.log_dir.clone();
        let handle = self.file_handles.entry(filename.clone()).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_dir.join(&filename))
                .ok()
        });

        if let Some(file) = handle {
            let _ = writeln!(file, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_dir_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_dir("~/logs"), home.join("logs"));
        }
        assert_eq!(expand_dir("/var/log/x"), PathBuf::from("/var/log/x"));
    }

    #[test]
    fn test_disabled_logger_is_noop() {
        let mut logger = SessionLogger::new(&LoggingConfig::default());
        logger.log_transition(&SessionState::default());
        assert!(logger.file_handles.is_empty());
    }
}
