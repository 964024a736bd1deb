use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

// Default configuration
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_NARROW_BREAKPOINT: f32 = 768.0;

/// Errors raised while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Light or dark visuals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeChoice::Dark
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    /// Delay of the simulated bot reply, in milliseconds
    pub reply_delay_ms: u64,
    /// Window width (points) below which the narrow layouts are used
    pub narrow_breakpoint: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
        }
    }
}

impl Settings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("edu", "slcm", "slcm-dashboard").ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Read settings from `path`. A missing file yields `Ok(None)`.
pub fn read_settings(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(Some(serde_json::from_str(&content)?))
}

/// Write settings to `path`, creating parent directories as needed.
pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(data.as_bytes()).map_err(io_err)?;
    Ok(())
}

/// Load settings from `path`, falling back to defaults on any problem.
pub fn load_settings(path: &Path) -> Settings {
    debug!(path = %path.display(), "loading settings");
    match read_settings(path) {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.reply_delay(), Duration::from_millis(1000));
        assert_eq!(settings.narrow_breakpoint, 768.0);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            theme: ThemeChoice::Dark,
            reply_delay_ms: 250,
            narrow_breakpoint: 600.0,
        };

        write_settings(&path, &settings).unwrap();
        let loaded = read_settings(&path).unwrap();
        assert_eq!(loaded, Some(settings));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = read_settings(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let loaded = read_settings(&path).unwrap().unwrap();
        assert_eq!(loaded.theme, ThemeChoice::Dark);
        assert_eq!(loaded.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
        assert_eq!(loaded.narrow_breakpoint, DEFAULT_NARROW_BREAKPOINT);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(read_settings(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_settings_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(load_settings(&path), Settings::default());

        fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeChoice::Light.toggled(), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::Dark.toggled(), ThemeChoice::Light);
        assert!(ThemeChoice::Dark.is_dark());
    }
}
