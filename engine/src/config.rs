//! Configuration persistence utilities
//!
//! Loads and saves per-clock TOML settings, either in the platform config
//! directory or at an explicit path.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("could not determine config directory")]
    NoConfigDir,
    /// IO error while reading/writing config
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Base configuration directory shared by the clocks
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "photo-clock", "clocks").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Configuration file path for a specific clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Load configuration from an explicit file.
///
/// Returns `None` if the file doesn't exist.
pub fn load_config_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Save configuration to an explicit file, creating parent directories
pub fn save_config_to<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load configuration for a specific clock
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(clock_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}

/// Save configuration for a specific clock
pub fn save_config<T: Serialize>(clock_name: &str, config: &T) -> Result<(), ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;
    save_config_to(&path, config)
}

/// Delete configuration for a specific clock
pub fn delete_config(clock_name: &str) -> Result<(), ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;

    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionParams, RampMode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestConfig {
        name: String,
        value: i32,
        motion: MotionParams,
    }

    #[test]
    fn test_config_path() {
        if let Some(path) = config_path("test_clock") {
            assert!(path.to_string_lossy().ends_with("test_clock.toml"));
        }
    }

    #[test]
    fn test_round_trip_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("clock.toml");
        let config = TestConfig {
            name: "photo".to_string(),
            value: 7,
            motion: MotionParams {
                ramp_mode: RampMode::Ladder,
                ..MotionParams::default()
            },
        };
        save_config_to(&path, &config).unwrap();
        let loaded: Option<TestConfig> = load_config_from(&path).unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<TestConfig> = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "name = [").unwrap();
        let result: Result<Option<TestConfig>, _> = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_partial_motion_uses_defaults() {
        let params: MotionParams = toml::from_str("max_velocity = 6.0").unwrap();
        assert_eq!(params.max_velocity, 6.0);
        assert_eq!(params.tick_scale, 5.0);
        assert_eq!(params.ramp_mode, RampMode::Continuous);
    }
}
