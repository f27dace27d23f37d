use crate::core::rxnav::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::core::{ConfigProvider, Locale};
use crate::core::messages::Messages;
use crate::utils::error::{RxError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub rxnav: RxNavConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RxNavConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for RxNavConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Falls back to the locale's default title when unset.
    pub title: Option<String>,
    pub locale: Locale,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RxError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RxError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("rxnav.base_url", &self.rxnav.base_url)?;
        validation::validate_range(
            "rxnav.timeout_seconds",
            self.rxnav.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_bind_address("server.bind_address", &self.server.bind_address)?;
        validation::validate_positive_number("server.port", self.server.port as usize, 1)?;
        if let Some(title) = &self.ui.title {
            validation::validate_non_empty_string("ui.title", title)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.rxnav.base_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.rxnav.timeout_seconds)
    }

    fn bind_addr(&self) -> String {
        // IPv6 literals need brackets in a socket address
        if self.server.bind_address.contains(':') {
            format!("[{}]:{}", self.server.bind_address, self.server.port)
        } else {
            format!("{}:{}", self.server.bind_address, self.server.port)
        }
    }

    fn title(&self) -> String {
        self.ui
            .title
            .clone()
            .unwrap_or_else(|| Messages::new(self.ui.locale).default_title().to_string())
    }

    fn locale(&self) -> Locale {
        self.ui.locale
    }
}
