use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cookie::CookieEncoding;

/// Name of the directory under the user's config dir, and of the
/// project-local override file stem.
pub const APP_NAME: &str = "base64url-cookie";

/// Effective settings after all configuration layers are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// How cookie values are encoded
    pub cookie_encoding: CookieEncoding,
    /// Largest input the CLI accepts without `--force` (0 = unlimited)
    pub max_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cookie_encoding: CookieEncoding::default(),
            max_size: 4 * 1024 * 1024,
        }
    }
}

/// One configuration file. Fields left out keep the value of the layer below.
#[derive(Debug, Default, Deserialize)]
struct SettingsLayer {
    #[serde(default)]
    cookie_encoding: Option<CookieEncoding>,
    #[serde(default)]
    max_size: Option<usize>,
}

/// Errors raised while reading configuration files.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config file {}: {}", path.display(), source)
            }
            ConfigError::Parse(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl Settings {
    /// Parses settings from TOML content on top of the built-in defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        settings.merge_toml(content)?;
        Ok(settings)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../../config.toml");
        Self::from_toml(content)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::load_default()?;
        settings.merge_file(path)?;
        Ok(settings)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/base64url-cookie/config.toml` (user overrides)
    /// 3. `./base64url-cookie.toml` (project-local overrides)
    ///
    /// Later layers override earlier ones field by field. A layer that fails
    /// to load is reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut settings = Self::load_default()?;

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                if let Err(e) = settings.merge_file(&user_config_path) {
                    eprintln!(
                        "Warning: Failed to load user config from {:?}: {}",
                        user_config_path, e
                    );
                }
            }
        }

        let local_config_path = Self::local_config_path();
        if local_config_path.exists() {
            if let Err(e) = settings.merge_file(&local_config_path) {
                eprintln!(
                    "Warning: Failed to load local config from {:?}: {}",
                    local_config_path, e
                );
            }
        }

        Ok(settings)
    }

    /// `<config dir>/base64url-cookie/config.toml`, when the platform has a
    /// config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// `./base64url-cookie.toml`
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(format!("{}.toml", APP_NAME))
    }

    /// Applies the fields present in `content` over the current values.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let layer: SettingsLayer = toml::from_str(content)?;
        if let Some(encoding) = layer.cookie_encoding {
            self.cookie_encoding = encoding;
        }
        if let Some(max_size) = layer.max_size {
            self.max_size = max_size;
        }
        Ok(())
    }

    fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&content)
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
