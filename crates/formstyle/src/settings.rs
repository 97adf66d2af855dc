//! Form settings schema and the button field injection.
//!
//! The host plugin describes its form settings screen as named sections,
//! each holding a list of fields. [`add_button_fields`] appends the colour
//! dropdown and the style checkbox group to the `form_button` section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::OptionCatalog;
use crate::options::{style_setting, COLOUR_SETTING};

/// Settings section that hosts the submit button fields.
pub const BUTTON_SECTION: &str = "form_button";

/// Colour preselected for new forms.
pub const DEFAULT_BUTTON_COLOUR: &str = "secondary";

/// Settings sections keyed by section name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSettingsFields(BTreeMap<String, SettingsSection>);

impl FormSettingsFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&SettingsSection> {
        self.0.get(name)
    }

    /// Returns the named section, creating an empty one if needed.
    pub fn section_mut(&mut self, name: &str) -> &mut SettingsSection {
        self.0.entry(name.to_string()).or_default()
    }

    pub fn insert(&mut self, name: &str, section: SettingsSection) {
        self.0.insert(name.to_string(), section);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A group of fields on the settings screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<SettingsField>,
}

/// Input widget used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Select,
    Checkbox,
    Text,
    /// Any widget this crate does not produce itself.
    #[serde(other)]
    Other,
}

/// One configurable setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsField {
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<FieldChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A choice in a select or checkbox field.
///
/// Checkbox choices carry a `name`: each box is stored as its own setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChoice {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
}

/// The "Button Colour" dropdown.
pub fn colour_field(catalog: &OptionCatalog) -> SettingsField {
    SettingsField {
        label: "Button Colour".to_string(),
        name: COLOUR_SETTING.to_string(),
        kind: FieldKind::Select,
        choices: catalog
            .colour_choices()
            .into_iter()
            .map(|colour| FieldChoice {
                label: colour.label,
                name: None,
                value: colour.key,
            })
            .collect(),
        default_value: Some(DEFAULT_BUTTON_COLOUR.to_string()),
    }
}

/// The "Button Styles" checkbox group.
pub fn style_field(catalog: &OptionCatalog) -> SettingsField {
    SettingsField {
        label: "Button Styles".to_string(),
        name: "button_styles".to_string(),
        kind: FieldKind::Checkbox,
        choices: catalog
            .style_choices()
            .into_iter()
            .map(|style| FieldChoice {
                name: Some(style_setting(&style.key)),
                label: style.label,
                value: style.key,
            })
            .collect(),
        default_value: None,
    }
}

/// Appends the colour and style fields to the [`BUTTON_SECTION`] section.
///
/// Existing fields are left untouched; the section is created if the host
/// did not supply one.
pub fn add_button_fields(mut fields: FormSettingsFields, catalog: &OptionCatalog) -> FormSettingsFields {
    let section = fields.section_mut(BUTTON_SECTION);
    section.fields.push(colour_field(catalog));
    section.fields.push(style_field(catalog));
    fields
}
