//! Configuration loading.
//!
//! Two kinds of configuration are handled here:
//! - The dataset configuration (`q2_config.txt`): flat `key=value` lines parsed by
//!   [`parse_config`] into a [`SampleConfig`]
//! - Application settings (`q2_settings.yaml`): file locations and logging options
//!   managed by [`ConfigManager`]

use crate::models::{PipelineSettings, SampleConfig};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// Default settings file name, looked up in the manager's base directory.
pub const SETTINGS_FILE: &str = "q2_settings.yaml";

/// Errors that can occur while loading the dataset configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(Utf8PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a `key=value` configuration file.
///
/// Blank lines and lines starting with `#` are ignored, as are lines without an `=`.
/// Each remaining line is split on its first `=`; key and value are trimmed.
/// When a key repeats, the last occurrence wins.
///
/// # Errors
/// [`ConfigError::FileNotFound`] if `path` does not exist, [`ConfigError::Read`] if it
/// cannot be read as UTF-8 text.
pub fn parse_config<P: AsRef<Utf8Path>>(path: P) -> Result<SampleConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config_str(&content);
    tracing::info!("Loaded {} config entries from {}", config.len(), path);
    Ok(config)
}

/// Parse `key=value` lines from an in-memory string.
pub fn parse_config_str(content: &str) -> SampleConfig {
    let mut config = SampleConfig::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => config.insert(key.trim(), value.trim()),
            None => tracing::debug!("Skipping config line without '=': {}", line),
        }
    }

    config
}

/// Where loaded settings came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Read from this settings file
    File(Utf8PathBuf),
    /// The settings file at this path was absent; defaults were used
    Defaults(Utf8PathBuf),
}

impl SettingsSource {
    pub fn log(&self) {
        match self {
            SettingsSource::File(path) => tracing::info!("Loaded settings from {}", path),
            SettingsSource::Defaults(path) => {
                tracing::warn!("Settings file not found at {}, using defaults", path)
            }
        }
    }
}

/// Configuration manager for the YAML settings file.
///
/// Relative paths inside the settings are resolved against the base directory, so the
/// pipeline can be pointed at any working tree.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a manager rooted at `base_dir`, using `q2_settings.yaml` inside it.
    pub fn new<P: AsRef<Utf8Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            settings_path: base_dir.join(SETTINGS_FILE),
            base_dir,
        }
    }

    /// Load the settings file, logging where the settings came from.
    ///
    /// # Returns
    /// The loaded settings with paths resolved against the base directory, or defaults
    /// if the file doesn't exist
    pub fn load_settings(&self) -> Result<PipelineSettings> {
        let (settings, source) = self.load_settings_with_source()?;
        source.log();
        Ok(settings)
    }

    /// Load the settings file without logging.
    ///
    /// Used before a subscriber is installed; call [`SettingsSource::log`] once logging
    /// is up.
    pub fn load_settings_with_source(&self) -> Result<(PipelineSettings, SettingsSource)> {
        if !self.settings_path.exists() {
            return Ok((
                self.resolve(PipelineSettings::default()),
                SettingsSource::Defaults(self.settings_path.clone()),
            ));
        }

        let file_contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: PipelineSettings = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        Ok((
            self.resolve(settings),
            SettingsSource::File(self.settings_path.clone()),
        ))
    }

    /// Save the settings file.
    pub fn save_settings(&self, settings: &PipelineSettings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Resolve every relative path in `settings` against the base directory.
    pub fn resolve(&self, settings: PipelineSettings) -> PipelineSettings {
        PipelineSettings {
            config_path: self.resolve_path(settings.config_path),
            data_path: self.resolve_path(settings.data_path),
            output_path: self.resolve_path(settings.output_path),
            log_dir: self.resolve_path(settings.log_dir),
            ..settings
        }
    }

    fn resolve_path(&self, path: Utf8PathBuf) -> Utf8PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }
}
