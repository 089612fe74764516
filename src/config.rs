use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::export::OutputFormat;
use crate::fight_week::MAX_PLAN_DAYS;
use crate::logging::{LogConfig, LogFormat, LogLevel};
use crate::models::Sex;

/// Keys accepted by [`AppConfig::get`] and [`AppConfig::set`]
pub const CONFIG_KEYS: &[&str] = &[
    "athlete.name",
    "athlete.sex",
    "athlete.weigh_in_days",
    "output.format",
    "output.color",
    "logging.level",
    "logging.format",
    "logging.file_path",
    "logging.include_spans",
];

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    pub metadata: ConfigMetadata,

    /// Defaults for the `plan` command
    #[serde(default)]
    pub athlete: AthleteSettings,

    /// Report rendering preferences
    #[serde(default)]
    pub output: OutputSettings,

    /// Logging setup
    #[serde(default)]
    pub logging: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Athlete defaults used when a flag is omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteSettings {
    /// Display name shown in report headers
    pub name: Option<String>,

    /// Sex used for sauna estimates
    pub sex: Sex,

    /// Days between plan start and weigh-in
    pub weigh_in_days: u32,
}

impl Default for AthleteSettings {
    fn default() -> Self {
        Self {
            name: None,
            sex: Sex::Male,
            weigh_in_days: 7,
        }
    }
}

/// Report rendering preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,

    /// Colour zone labels in table output
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();

        AppConfig {
            metadata: ConfigMetadata {
                version: "1.0".to_string(),
                created_at: now,
                updated_at: now,
            },
            athlete: AthleteSettings::default(),
            output: OutputSettings::default(),
            logging: LogConfig::default(),
        }
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save configuration to TOML file, creating parent directories
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(&path, toml_content)?;
        debug!(path = %path.as_ref().display(), "Saved configuration");
        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fightcamp")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults when the file is absent
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from_file(path).map_err(|err| {
            warn!(path = %path.display(), error = %err, "Unreadable config file");
            err
        })
    }

    /// Read a single setting as text
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "athlete.name" => self.athlete.name.clone().unwrap_or_default(),
            "athlete.sex" => self.athlete.sex.to_string(),
            "athlete.weigh_in_days" => self.athlete.weigh_in_days.to_string(),
            "output.format" => self.output.format.to_string(),
            "output.color" => self.output.color.to_string(),
            "logging.level" => self.logging.level.to_string(),
            "logging.format" => self.logging.format.to_string(),
            "logging.file_path" => self
                .logging
                .file_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "logging.include_spans" => self.logging.include_spans.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        };
        Ok(value)
    }

    /// Update a single setting from text
    ///
    /// An empty value clears the optional settings (`athlete.name`,
    /// `logging.file_path`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "athlete.name" => {
                self.athlete.name = (!value.is_empty()).then(|| value.to_string());
            }
            "athlete.sex" => {
                self.athlete.sex = value.parse().map_err(|_| invalid(key, value))?;
            }
            "athlete.weigh_in_days" => {
                let days: u32 = value.parse().map_err(|_| invalid(key, value))?;
                if !(1..=MAX_PLAN_DAYS).contains(&days) {
                    return Err(invalid(key, value).into());
                }
                self.athlete.weigh_in_days = days;
            }
            "output.format" => {
                self.output.format = value.parse().map_err(|_| invalid(key, value))?;
            }
            "output.color" => self.output.color = parse_bool(key, value)?,
            "logging.level" => {
                self.logging.level = value.parse::<LogLevel>().map_err(|_| invalid(key, value))?;
            }
            "logging.format" => {
                self.logging.format =
                    value.parse::<LogFormat>().map_err(|_| invalid(key, value))?;
            }
            "logging.file_path" => {
                self.logging.file_path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "logging.include_spans" => self.logging.include_spans = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }

        self.metadata.updated_at = Utc::now();
        Ok(())
    }

    /// Every key with its current value, in [`CONFIG_KEYS`] order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}
