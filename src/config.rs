//! Configuration types for the moodbar chat engine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub session: SessionConfig,
    pub input: InputConfig,
    pub replies: ReplyConfig,
    pub log: LogConfig,
}

/// Per-conversation memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Past messages and emotions kept per session.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: crate::session::DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Input validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Longest accepted message, in characters.
    pub max_message_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 5000,
        }
    }
}

/// Reply formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Append the "Detected emotions" breakdown to ordinary replies.
    pub show_breakdown: bool,
    /// Emotions listed in the breakdown.
    pub breakdown_limit: usize,
    /// Scores at or below this are left out of the breakdown.
    pub breakdown_min_score: f64,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            show_breakdown: true,
            breakdown_limit: 5,
            breakdown_min_score: 0.01,
        }
    }
}

/// Conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    /// Directory holding the log database. Defaults to the platform data
    /// directory.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

impl LogConfig {
    /// Configured directory, or `<data dir>/moodbar`.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("moodbar"),
        }
    }
}

impl ChatConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::ChatError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::ChatError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/moodbar/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("moodbar").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("moodbar")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/moodbar-config/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChatConfig::default();
        assert!(config.session.history_limit > 0);
        assert_eq!(config.input.max_message_chars, 5000);
        assert!(config.replies.show_breakdown);
        assert_eq!(config.replies.breakdown_limit, 5);
        assert!(config.log.enabled);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ChatConfig::default();
        config.input.max_message_chars = 280;
        config.replies.show_breakdown = false;
        config.log.dir = Some(PathBuf::from("/var/lib/moodbar"));

        config.save_to_file(&path).expect("save config");
        assert!(path.exists());

        let loaded = ChatConfig::from_file(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[input]\nmax_message_chars = 100\n").expect("write");

        let loaded = ChatConfig::from_file(&path).expect("load config");
        assert_eq!(loaded.input.max_message_chars, 100);
        assert_eq!(loaded.session, SessionConfig::default());
        assert_eq!(loaded.replies, ReplyConfig::default());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[input\n").expect("write");

        match ChatConfig::from_file(&path) {
            Err(crate::error::ChatError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let result = ChatConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::ChatError::Io(_))));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = ChatConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("moodbar"));
    }

    #[test]
    fn explicit_log_dir_wins() {
        let log = LogConfig {
            enabled: true,
            dir: Some(PathBuf::from("/srv/logs")),
        };
        assert_eq!(log.resolved_dir(), PathBuf::from("/srv/logs"));
    }
}
