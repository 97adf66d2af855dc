//! Error types.
//!
//! - [`MissingDependencyError`]: a required host plugin is inactive
//! - [`MalformedMarkupError`]: button markup lacks a usable submit control
//! - [`CatalogError`]: a theme colour value is not a CSS colour
//! - [`ConfigError`]: configuration could not be read or parsed

use std::path::PathBuf;

use formstyle_markup::ParseError;

/// Returned by [`install`](crate::install) when required plugins are not
/// active. Nothing is registered in that case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{integration}' requires inactive plugin(s): {list}", list = .missing.join(", "))]
pub struct MissingDependencyError {
    /// Name of the integration that declined to install.
    pub integration: String,
    /// Required plugin ids that are not active, in declaration order.
    pub missing: Vec<String>,
}

/// The submit-button markup could not be rewritten.
///
/// This is a theme or plugin configuration problem: the markup handed to
/// the transformer is not what a form plugin renders for a submit control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedMarkupError {
    #[error("button markup could not be parsed: {0}")]
    Unparseable(#[from] ParseError),
    #[error("button markup has no <input type=\"submit\"> control")]
    MissingSubmitControl,
}

/// Theme colour validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("theme colour '{key}' has unrecognised value '{value}'")]
    InvalidColour { key: String, value: String },
}

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
