//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub session: SessionDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_scrollback")]
    pub max_scrollback: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_scrollback: default_max_scrollback(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_max_scrollback() -> usize {
    500
}

/// Values dispatched into the store right after startup. The store itself
/// always starts at the default record; these arrive as ordinary transition
/// requests, visible in the activity log like any other.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionDefaults {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// When no username is configured, suggest a random guest name instead
    /// of starting blank.
    #[serde(default)]
    pub suggest_guest: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/share/sessiontui/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(cfg.ui.max_scrollback, 500);
        assert!(!cfg.logging.enabled);
        assert!(cfg.session.username.is_none());
        assert!(!cfg.session.suggest_guest);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [session]
            username = "alice"

            [ui]
            max_scrollback = 50
            "#,
        )
        .unwrap();
        assert_eq!(cfg.session.username.as_deref(), Some("alice"));
        assert_eq!(cfg.ui.max_scrollback, 50);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
    }
}
