use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::form::DESCRIPTION_MAX_CHARS;
use crate::util::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "registration.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WizardConfig {
    pub description_max_chars: usize,
    /// Route handed to the navigator after a successful registration.
    pub login_route: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub application: ApplicationConfig,
    pub wizard: WizardConfig,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            name: "Seller Registration".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        WizardConfig {
            description_max_chars: DESCRIPTION_MAX_CHARS,
            login_route: "/seller/login".to_string(),
        }
    }
}

impl Config {
    /// Load `path` (defaults when the file does not exist), then apply
    /// environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            tracing::debug!("{} not found, using defaults", path.display());
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("REGISTRATION_LOG_LEVEL") {
            self.application.log_level = level;
        }
        if let Ok(route) = env::var("REGISTRATION_LOGIN_ROUTE") {
            self.wizard.login_route = route;
        }
    }
}
