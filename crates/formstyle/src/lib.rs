//! # formstyle - theme-driven submit button styling for form plugins
//!
//! `formstyle` connects a form-builder plugin to a site theme. It does two
//! things:
//!
//! 1. Adds **Button Colour** and **Button Styles** fields to the plugin's
//!    form settings, populated from the theme's colour palette and button
//!    style flags.
//! 2. Rewrites the plugin's rendered `<input type="submit">` into a
//!    `<button>` that carries the chosen colour and styles as CSS classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use formstyle::{transform_submit_button, FormButtonOptions, OptionCatalog, ThemeMods};
//!
//! let catalog = OptionCatalog::new(ThemeMods::new());
//! let options = FormButtonOptions::new()
//!     .with_colour("dark")
//!     .with_style("outlined");
//!
//! let html = transform_submit_button(
//!     r#"<input type="submit" value="Send" class="btn">"#,
//!     &options,
//!     &catalog.style_choices(),
//! ).unwrap();
//!
//! assert_eq!(html, r#"<button type="submit" class="btn dark outlined">Send</button>"#);
//! ```
//!
//! ## Host Integration
//!
//! Hosts implement [`PluginRegistry`] and [`HookRegistry`] (or use
//! [`ActivePlugins`] and [`FilterTable`]) and call [`install`] once at
//! startup:
//!
//! ```rust
//! use std::sync::Arc;
//! use formstyle::{install, ActivePlugins, FilterTable, IntegrationConfig, DISABLE_CSS_HOOK};
//!
//! let config = IntegrationConfig::default();
//! let plugins: ActivePlugins = config.required_plugins.iter().cloned().collect();
//! let mut hooks = FilterTable::new();
//!
//! install(&config, Arc::new(config.catalog()), &plugins, &mut hooks).unwrap();
//! assert!(hooks.apply_flag(DISABLE_CSS_HOOK, false));
//! ```
//!
//! If a required plugin is inactive, [`install`] registers nothing and
//! returns [`MissingDependencyError`]; the plugin's own markup is then left
//! alone.
//!
//! ## Theme Overrides
//!
//! Colours come from theme modifiers (`primary_colour`, `dark_colour`, ...)
//! with built-in defaults. Themes can reshape either list with
//! [`OptionCatalog::with_colour_override`] and
//! [`OptionCatalog::with_style_override`].
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. The crate never installs a
//! subscriber; that is the host's job.

pub mod button;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hooks;
pub mod integration;
pub mod options;
pub mod settings;

pub use button::{class_suffix, compose_classes, is_submit_control, transform_submit_button};
pub use catalog::{
    label_from_key, ColourOption, OptionCatalog, StyleOption, ThemeColour, ThemeConfigProvider,
};
pub use config::{EnvironmentType, IntegrationConfig, ThemeMods};
pub use error::{CatalogError, ConfigError, MalformedMarkupError, MissingDependencyError};
pub use hooks::{
    Filter, FilterTable, HookRegistry, DISABLE_CSS_HOOK, SETTINGS_FIELDS_HOOK, SUBMIT_BUTTON_HOOK,
};
pub use integration::{
    apply_button_options, check_required_plugins, install, missing_plugins, ActivePlugins,
    PluginRegistry,
};
pub use options::{is_truthy, FormButtonOptions, FormRecord};
pub use settings::{
    add_button_fields, FieldChoice, FieldKind, FormSettingsFields, SettingsField, SettingsSection,
};

// Re-export so hosts can work with fragments without a second dependency line.
pub use formstyle_markup as markup;
