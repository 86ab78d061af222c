//! Configuration management for PokeTeam

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::pokeapi::{DEFAULT_API_HOST, DEFAULT_CATALOG_LIMIT};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API host (defaults to the public PokeAPI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Number of catalog entries to request
    #[serde(default = "default_catalog_limit")]
    pub catalog_limit: u32,

    /// User whose team session commands act on when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_catalog_limit() -> u32 {
    DEFAULT_CATALOG_LIMIT
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".poketeam").join("config.yaml"))
    }

    /// Resolve the config path: explicit path if given, otherwise the default
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, failing if the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, falling back to defaults when the file does not exist.
    ///
    /// The catalog needs no credentials, so a missing file is not an error.
    /// A file that exists but cannot be parsed still is.
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Reject values no command could work with
    pub fn validate(&self) -> Result<()> {
        if self.catalog_limit == 0 {
            return Err(
                ConfigError::Invalid("catalog_limit must be greater than zero".to_string()).into(),
            );
        }

        if let Some(host) = &self.api_host {
            if !(host.starts_with("http://") || host.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "api_host must be an http(s) URL, got '{}'",
                    host
                ))
                .into());
            }
        }

        Ok(())
    }

    /// API host to use, honoring a runtime override
    pub fn effective_api_host(&self, api_host_override: Option<&str>) -> String {
        api_host_override
            .map(str::to_string)
            .or_else(|| self.api_host.clone())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: None,
            catalog_limit: default_catalog_limit(),
            default_user: None,
            preferences: Preferences::default(),
        }
    }
}
