//! Composition root: plugin gating and filter installation.
//!
//! [`install`] is called once at startup. It checks that the required
//! plugins are active and, only then, registers three filters:
//!
//! | Hook                     | Effect                                          |
//! |--------------------------|-------------------------------------------------|
//! | [`SETTINGS_FIELDS_HOOK`] | adds Button Colour / Button Styles fields       |
//! | [`SUBMIT_BUTTON_HOOK`]   | rewrites the submit input as a styled button    |
//! | [`DISABLE_CSS_HOOK`]     | always disables the plugin's default stylesheet |

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::button::transform_submit_button;
use crate::catalog::OptionCatalog;
use crate::config::IntegrationConfig;
use crate::error::MissingDependencyError;
use crate::hooks::{Filter, HookRegistry, DISABLE_CSS_HOOK, SETTINGS_FIELDS_HOOK, SUBMIT_BUTTON_HOOK};
use crate::options::{FormButtonOptions, FormRecord};
use crate::settings::add_button_fields;

/// Name reported in diagnostics and in [`MissingDependencyError`].
pub const INTEGRATION_NAME: &str = "formstyle";

/// Which host plugins are active.
pub trait PluginRegistry {
    fn active_plugins(&self) -> BTreeSet<String>;

    fn is_active(&self, plugin: &str) -> bool {
        self.active_plugins().contains(plugin)
    }
}

/// A fixed set of active plugin ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePlugins(BTreeSet<String>);

impl ActivePlugins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `plugin` active, returning the updated set for chaining.
    pub fn with(mut self, plugin: &str) -> Self {
        self.0.insert(plugin.to_string());
        self
    }
}

impl FromIterator<String> for ActivePlugins {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl PluginRegistry for ActivePlugins {
    fn active_plugins(&self) -> BTreeSet<String> {
        self.0.clone()
    }

    fn is_active(&self, plugin: &str) -> bool {
        self.0.contains(plugin)
    }
}

/// Required plugins that are not active, in the order given.
pub fn missing_plugins(required: &[String], plugins: &dyn PluginRegistry) -> Vec<String> {
    let active = plugins.active_plugins();
    required
        .iter()
        .filter(|plugin| !active.contains(plugin.as_str()))
        .cloned()
        .collect()
}

/// Fails when any of `config.required_plugins` is inactive.
///
/// Outside production each missing plugin is logged as a warning.
pub fn check_required_plugins(
    config: &IntegrationConfig,
    plugins: &dyn PluginRegistry,
) -> Result<(), MissingDependencyError> {
    let missing = missing_plugins(&config.required_plugins, plugins);
    if missing.is_empty() {
        return Ok(());
    }

    if !config.environment.is_production() {
        for plugin in &missing {
            tracing::warn!(
                integration = INTEGRATION_NAME,
                plugin = %plugin,
                environment = config.environment.as_str(),
                "integration requires inactive plugin"
            );
        }
    }

    Err(MissingDependencyError {
        integration: INTEGRATION_NAME.to_string(),
        missing,
    })
}

/// Applies `form`'s button selections to `markup`.
///
/// Markup without a usable submit control is returned unchanged and a
/// warning is logged; the plugin's own button is better than none.
pub fn apply_button_options(markup: String, form: &FormRecord, catalog: &OptionCatalog) -> String {
    let styles = catalog.style_choices();
    let options = FormButtonOptions::from_form(form, &styles);
    match transform_submit_button(&markup, &options, &styles) {
        Ok(html) => html,
        Err(err) => {
            tracing::warn!(form_id = form.id, error = %err, "leaving submit button markup unchanged");
            markup
        }
    }
}

/// Registers the integration's filters on `hooks`.
///
/// # Errors
///
/// Returns [`MissingDependencyError`] if a required plugin is inactive; in
/// that case `hooks` is not touched.
pub fn install<H>(
    config: &IntegrationConfig,
    catalog: Arc<OptionCatalog>,
    plugins: &dyn PluginRegistry,
    hooks: &mut H,
) -> Result<(), MissingDependencyError>
where
    H: HookRegistry + ?Sized,
{
    check_required_plugins(config, plugins)?;

    let fields_catalog = Arc::clone(&catalog);
    hooks.add_filter(
        SETTINGS_FIELDS_HOOK,
        Filter::settings_fields(move |fields, _form| add_button_fields(fields, &fields_catalog)),
    );

    hooks.add_filter(
        SUBMIT_BUTTON_HOOK,
        Filter::markup(move |markup, form| apply_button_options(markup, form, &catalog)),
    );

    hooks.add_filter(DISABLE_CSS_HOOK, Filter::flag(|_| true));

    tracing::debug!(integration = INTEGRATION_NAME, "filters installed");
    Ok(())
}
