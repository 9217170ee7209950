//! Configuration loading and management
//!
//! Handles parsing of `config.toml` inside the focusboard data directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the configuration inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Upper bound for `pomodoro.tick_ms`
const MAX_TICK_MS: u64 = 60_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pomodoro host configuration
    #[serde(default)]
    pub pomodoro: PomodoroConfig,

    /// Completion cue configuration
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Pomodoro host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    /// Milliseconds between ticks while the timer runs
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    1000
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

/// How the terminal notifier raises its cue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Ring the terminal bell
    #[serde(default = "default_true")]
    pub bell: bool,

    /// Raise a desktop notification through `command`
    #[serde(default)]
    pub desktop: bool,

    /// Program invoked as `<command> <title> <body>`
    #[serde(default = "default_notify_command")]
    pub command: String,
}

fn default_true() -> bool {
    true
}

fn default_notify_command() -> String {
    "notify-send".to_string()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            bell: true,
            desktop: false,
            command: default_notify_command(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the data directory, or return defaults
    pub fn load_from_dir(data_dir: &Path) -> Self {
        let config_path = data_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %config_path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.pomodoro.tick_ms == 0 || self.pomodoro.tick_ms > MAX_TICK_MS {
            return Err(crate::error::Error::InvalidConfig(format!(
                "pomodoro.tick_ms must be between 1 and {MAX_TICK_MS}"
            )));
        }
        if self.notify.desktop && self.notify.command.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "notify.command cannot be empty when notify.desktop is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
