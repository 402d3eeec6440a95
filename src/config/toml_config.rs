use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./genderize-saved.json";

lazy_static! {
    static ref ENV_PLACEHOLDER: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub api: ApiConfig,
    pub store: StoreConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Drop predictions that arrive after a newer submit started.
    pub ignore_stale_predictions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ignore_stale_predictions: true,
        }
    }
}

impl FormConfig {
    /// Loads a TOML file, or the defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are kept.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for FormConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.api.timeout_seconds
    }

    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn ignore_stale_predictions(&self) -> bool {
        self.session.ignore_stale_predictions
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.endpoint", &self.api.endpoint)?;
        validation::validate_path("store.path", &self.store.path)?;

        if let Some(key) = &self.api.api_key {
            validation::validate_non_empty_string("api.api_key", key)?;
            if key.contains("${") {
                return Err(FormError::ConfigError {
                    message: format!("api.api_key references an unset variable: {}", key),
                });
            }
        }

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
