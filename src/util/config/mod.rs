//! dcrtc configuration system
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level (~/.config/dcrtc/config.toml)
//! 3. Default values
//! ```
//!
//! # Example
//!
//! ```toml
//! [output]
//! stage = "lex"
//! format = "json"
//!
//! [log]
//! level = "debug"
//! ```

use crate::frontend::config::{CompileConfig, ConfigAdapter, OutputFormat, OutputStage};
use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-level configuration for dcrtc
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Log settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Stage to stop after
    #[serde(default)]
    pub stage: Option<OutputStage>,
    /// Output format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: Option<LogLevel>,
}

impl ConfigAdapter for UserConfig {
    fn adapt(&self) -> CompileConfig {
        let mut config = CompileConfig::new();
        if let Some(stage) = self.output.stage {
            config = config.with_stage(stage);
        }
        if let Some(format) = self.output.format {
            config = config.with_format(format);
        }
        config
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("dcrtc"));
    }

    // Fallback to ~/.config/dcrtc
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("dcrtc"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("dcrtc"));
    }

    None
}

/// Get the user config file path (~/.config/dcrtc/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit path, defaulting when it is absent
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to an explicit path, creating parent directories
pub fn save_config_to(
    config: &UserConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
