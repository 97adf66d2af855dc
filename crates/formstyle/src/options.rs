//! Per-form button selections.
//!
//! The host plugin persists operator choices on its form record. The
//! colour lives under `button_colour`; each style flag lives under its own
//! `button_styles_<key>` entry, because the settings UI renders styles as
//! a checkbox group with one input per choice.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::StyleOption;

/// Form setting holding the selected colour key.
pub const COLOUR_SETTING: &str = "button_colour";

/// Prefix of the per-style form settings.
pub const STYLE_SETTING_PREFIX: &str = "button_styles_";

/// A form as persisted by the host plugin.
///
/// Only `id` and `title` are modelled; every other setting is kept as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl FormRecord {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            settings: Map::new(),
        }
    }

    /// Sets a setting, returning the updated record for chaining.
    pub fn with_setting(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(name.to_string(), value.into());
        self
    }

    pub fn setting(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    /// Whether the named setting is present and truthy (see [`is_truthy`]).
    pub fn is_enabled(&self, name: &str) -> bool {
        self.setting(name).is_some_and(is_truthy)
    }
}

/// Loose truthiness as the host stores it.
///
/// Falsy: `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]`, `{}`.
/// Everything else is truthy, including `"0.0"` and `"false"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// The colour and styles selected for one form's submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormButtonOptions {
    pub colour: Option<String>,
    pub styles: BTreeSet<String>,
}

impl FormButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colour(mut self, colour: &str) -> Self {
        self.colour = Some(colour.to_string());
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.styles.insert(style.to_string());
        self
    }

    /// Reads the selections stored on `form`.
    ///
    /// Only styles in `known_styles` are consulted. The colour is taken as
    /// stored, without checking it against the palette.
    pub fn from_form(form: &FormRecord, known_styles: &[StyleOption]) -> Self {
        let colour = form
            .setting(COLOUR_SETTING)
            .filter(|value| is_truthy(value))
            .and_then(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

        let styles = known_styles
            .iter()
            .filter(|style| form.is_enabled(&style_setting(&style.key)))
            .map(|style| style.key.clone())
            .collect();

        Self { colour, styles }
    }

    pub fn is_empty(&self) -> bool {
        self.colour.is_none() && self.styles.is_empty()
    }
}

/// Name of the form setting that stores the flag for `style_key`.
pub fn style_setting(style_key: &str) -> String {
    format!("{}{}", STYLE_SETTING_PREFIX, style_key)
}
