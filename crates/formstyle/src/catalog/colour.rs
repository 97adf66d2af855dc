//! Theme colour palette entries.

use cssparser::{Color, Parser, ParserInput};
use serde::{Deserialize, Serialize};

use super::label_from_key;

/// Base palette: `(key, theme modifier, default value)`, in declaration order.
pub const BASE_COLOURS: &[(&str, &str, &str)] = &[
    ("primary", "primary_colour", "#000"),
    ("secondary", "secondary_colour", "#666"),
    ("tertiary", "tertiary_colour", "#b5b5b5"),
    ("dark", "dark_colour", "#21111E"),
    ("light", "light_colour", "#fff"),
    ("bg", "bg_colour", "#fff"),
];

/// A palette entry: slug key plus its literal CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColour {
    pub key: String,
    pub value: String,
}

impl ThemeColour {
    pub fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// A colour as offered in the settings UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourOption {
    pub key: String,
    pub label: String,
}

impl ColourOption {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }

    pub fn from_colour(colour: &ThemeColour) -> Self {
        Self {
            key: colour.key.clone(),
            label: label_from_key(&colour.key),
        }
    }
}

/// Whether `value` reads as a single CSS colour.
///
/// Hash, named and functional colours are parsed in full and nothing may
/// follow the colour. Custom property references (`var(--x)`) are not
/// colours and are rejected.
pub fn is_css_colour(value: &str) -> bool {
    let mut input = ParserInput::new(value.trim());
    let mut parser = Parser::new(&mut input);
    let parsed = Color::parse(&mut parser).is_ok() && parser.expect_exhausted().is_ok();
    parsed
}
