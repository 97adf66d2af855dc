//! Filter hook registration.
//!
//! A host exposes named filter hooks; each registered [`Filter`] receives a
//! value and returns a (possibly altered) value, and filters on the same
//! hook run as a chain in registration order.
//!
//! [`HookRegistry`] is the seam a host implements. [`FilterTable`] is a
//! ready-made in-memory registry for hosts without their own.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::options::FormRecord;
use crate::settings::FormSettingsFields;

/// Hook filtering the form settings schema.
pub const SETTINGS_FIELDS_HOOK: &str = "form_settings_fields";

/// Hook filtering the rendered submit button markup.
pub const SUBMIT_BUTTON_HOOK: &str = "form_submit_button";

/// Hook deciding whether the plugin's default stylesheet is disabled.
pub const DISABLE_CSS_HOOK: &str = "form_disable_css";

type SettingsFieldsFn =
    Arc<dyn Fn(FormSettingsFields, &FormRecord) -> FormSettingsFields + Send + Sync>;
type MarkupFn = Arc<dyn Fn(String, &FormRecord) -> String + Send + Sync>;
type FlagFn = Arc<dyn Fn(bool) -> bool + Send + Sync>;

/// A filter callback, typed by what it filters.
#[derive(Clone)]
pub enum Filter {
    SettingsFields(SettingsFieldsFn),
    Markup(MarkupFn),
    Flag(FlagFn),
}

impl Filter {
    pub fn settings_fields<F>(f: F) -> Self
    where
        F: Fn(FormSettingsFields, &FormRecord) -> FormSettingsFields + Send + Sync + 'static,
    {
        Filter::SettingsFields(Arc::new(f))
    }

    pub fn markup<F>(f: F) -> Self
    where
        F: Fn(String, &FormRecord) -> String + Send + Sync + 'static,
    {
        Filter::Markup(Arc::new(f))
    }

    pub fn flag<F>(f: F) -> Self
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        Filter::Flag(Arc::new(f))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Filter::SettingsFields(_) => "settings_fields",
            Filter::Markup(_) => "markup",
            Filter::Flag(_) => "flag",
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter::{}", self.kind())
    }
}

/// Where filters get registered.
pub trait HookRegistry {
    /// Registers `filter` on `hook`, after any filters already there.
    fn add_filter(&mut self, hook: &str, filter: Filter);
}

/// In-memory [`HookRegistry`] that can also run the chains.
///
/// A filter whose kind does not match the `apply_*` call is skipped.
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    hooks: BTreeMap<String, Vec<Filter>>,
}

impl FilterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of filters registered on `hook`.
    pub fn filter_count(&self, hook: &str) -> usize {
        self.hooks.get(hook).map_or(0, Vec::len)
    }

    /// Hooks with at least one filter, in name order.
    pub fn hooks(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn apply_settings_fields(
        &self,
        hook: &str,
        mut fields: FormSettingsFields,
        form: &FormRecord,
    ) -> FormSettingsFields {
        for filter in self.filters(hook) {
            match filter {
                Filter::SettingsFields(f) => fields = f(fields, form),
                other => skip(hook, other),
            }
        }
        fields
    }

    pub fn apply_markup(&self, hook: &str, mut markup: String, form: &FormRecord) -> String {
        for filter in self.filters(hook) {
            match filter {
                Filter::Markup(f) => markup = f(markup, form),
                other => skip(hook, other),
            }
        }
        markup
    }

    pub fn apply_flag(&self, hook: &str, mut value: bool) -> bool {
        for filter in self.filters(hook) {
            match filter {
                Filter::Flag(f) => value = f(value),
                other => skip(hook, other),
            }
        }
        value
    }

    fn filters(&self, hook: &str) -> &[Filter] {
        self.hooks.get(hook).map(Vec::as_slice).unwrap_or_default()
    }
}

impl HookRegistry for FilterTable {
    fn add_filter(&mut self, hook: &str, filter: Filter) {
        self.hooks.entry(hook.to_string()).or_default().push(filter);
    }
}

fn skip(hook: &str, filter: &Filter) {
    tracing::debug!(hook, kind = filter.kind(), "skipping filter of mismatched kind");
}
