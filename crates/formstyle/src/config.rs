//! Integration configuration.
//!
//! Configuration is plain YAML, every key optional:
//!
//! ```yaml
//! environment: staging
//! required_plugins:
//!   - gravityforms/gravityforms.php
//! theme:
//!   primary_colour: "#0b5394"
//!   dark_colour: "#111"
//! ```
//!
//! The `theme` map holds theme modifiers, read by the
//! [`OptionCatalog`](crate::OptionCatalog) through [`ThemeConfigProvider`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{OptionCatalog, ThemeConfigProvider};
use crate::error::ConfigError;

/// Plugin that must be active for the integration to install.
pub const DEFAULT_REQUIRED_PLUGIN: &str = "gravityforms/gravityforms.php";

/// Environment variable overriding [`IntegrationConfig::environment`].
pub const ENVIRONMENT_VAR: &str = "FORMSTYLE_ENVIRONMENT";

/// Deployment environment.
///
/// Unrecognised names resolve to [`EnvironmentType::Production`], so a
/// typo never turns on non-production diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum EnvironmentType {
    Local,
    Development,
    Staging,
    #[default]
    Production,
}

impl EnvironmentType {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "local" => EnvironmentType::Local,
            "development" => EnvironmentType::Development,
            "staging" => EnvironmentType::Staging,
            _ => EnvironmentType::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentType::Local => "local",
            EnvironmentType::Development => "development",
            EnvironmentType::Staging => "staging",
            EnvironmentType::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, EnvironmentType::Production)
    }
}

impl From<String> for EnvironmentType {
    fn from(name: String) -> Self {
        EnvironmentType::parse(&name)
    }
}

/// Theme modifier values keyed by modifier name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeMods(BTreeMap<String, String>);

impl ThemeMods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a modifier, returning the updated map for chaining.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ThemeConfigProvider for ThemeMods {
    fn theme_mod(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

/// Top-level configuration for the integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    pub environment: EnvironmentType,
    /// Plugin ids that must all be active before any hook is registered.
    pub required_plugins: Vec<String>,
    pub theme: ThemeMods,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentType::default(),
            required_plugins: vec![DEFAULT_REQUIRED_PLUGIN.to_string()],
            theme: ThemeMods::default(),
        }
    }
}

impl IntegrationConfig {
    /// Parses configuration from a YAML string.
    ///
    /// An empty document yields [`IntegrationConfig::default`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Applies the [`ENVIRONMENT_VAR`] override, if set.
    pub fn apply_env(mut self) -> Self {
        if let Ok(name) = std::env::var(ENVIRONMENT_VAR) {
            self.environment = EnvironmentType::parse(&name);
        }
        self
    }

    /// Builds an option catalog over this configuration's theme modifiers.
    pub fn catalog(&self) -> OptionCatalog {
        OptionCatalog::new(self.theme.clone())
    }
}
