//! TOML-based configuration for the demo binary.
//!
//! Reads `DemoConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\CursorLock\config.toml`
//! - Linux:    `~/.config/cursorlock/config.toml`
//! - macOS:    `~/Library/Application Support/CursorLock/config.toml`
//!
//! Every field carries a serde default, so a missing or partial file works:
//! the built-in defaults reproduce the original demo behaviour (confine to
//! `0,0 1080x600`, hold for five seconds).
//!
//! This file configures the demo binary only.  The confinement library itself
//! reads no files and no environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub confinement: RegionConfig,
    #[serde(default)]
    pub demo: DemoSettings,
}

/// The rectangle the demo confines the cursor to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionConfig {
    /// X coordinate of the top-left corner in screen pixels.
    #[serde(default)]
    pub x: i32,
    /// Y coordinate of the top-left corner in screen pixels.
    #[serde(default)]
    pub y: i32,
    /// Region width in pixels.
    #[serde(default = "default_width")]
    pub width: i32,
    /// Region height in pixels.
    #[serde(default = "default_height")]
    pub height: i32,
}

/// Demo run behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoSettings {
    /// How long to hold the confinement before releasing, in milliseconds.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_width() -> i32 {
    1080
}
fn default_height() -> i32 {
    600
}
fn default_hold_ms() -> u64 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
            log_level: default_log_level(),
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the platform base directory
/// cannot be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .ok_or(ConfigError::NoPlatformConfigDir)
        .map(|dir| dir.join("config.toml"))
}

/// Loads `DemoConfig` from disk, returning `DemoConfig::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<DemoConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DemoConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("CursorLock"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("cursorlock"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("CursorLock")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_demo_values() {
        // Arrange / Act
        let cfg = DemoConfig::default();

        // Assert
        assert_eq!(cfg.confinement.x, 0);
        assert_eq!(cfg.confinement.y, 0);
        assert_eq!(cfg.confinement.width, 1080);
        assert_eq!(cfg.confinement.height, 600);
        assert_eq!(cfg.demo.hold_ms, 5000);
        assert_eq!(cfg.demo.log_level, "info");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        // Arrange
        let mut cfg = DemoConfig::default();
        cfg.confinement.width = 1920;
        cfg.demo.hold_ms = 250;

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: DemoConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: DemoConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, DemoConfig::default());
    }

    #[test]
    fn test_deserialize_partial_section_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[confinement]
width = 800

[demo]
hold_ms = 1000
"#;

        // Act
        let cfg: DemoConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.confinement.width, 800);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.confinement.height, 600);
        assert_eq!(cfg.demo.hold_ms, 1000);
        assert_eq!(cfg.demo.log_level, "info");
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let result: Result<DemoConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }
}
