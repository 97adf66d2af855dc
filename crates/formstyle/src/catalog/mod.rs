//! Selectable button colours and style flags.
//!
//! This module provides:
//!
//! - [`OptionCatalog`]: the ordered colour and style choices for a theme
//! - [`ThemeConfigProvider`]: where theme modifier values come from
//! - [`ThemeColour`] / [`ColourOption`]: a palette entry and its UI choice
//! - [`StyleOption`]: an independently toggleable style flag
//!
//! Both lists start from a fixed base set in declaration order. A theme may
//! pass an override function to add, remove, relabel or reorder entries.

mod colour;
mod style;

use std::fmt;
use std::sync::Arc;

pub use colour::{is_css_colour, ColourOption, ThemeColour, BASE_COLOURS};
pub use style::{StyleOption, BASE_STYLES};

use crate::error::CatalogError;

/// Source of theme modifier values (e.g. `primary_colour`).
pub trait ThemeConfigProvider: Send + Sync {
    /// Returns the configured value, or `None` to fall back to the default.
    fn theme_mod(&self, name: &str) -> Option<String>;
}

type ColourOverride = Arc<dyn Fn(Vec<ThemeColour>) -> Vec<ThemeColour> + Send + Sync>;
type StyleOverride = Arc<dyn Fn(Vec<StyleOption>) -> Vec<StyleOption> + Send + Sync>;

/// Ordered colour and style choices available to submit buttons.
///
/// # Example
///
/// ```rust
/// use formstyle::{OptionCatalog, StyleOption, ThemeMods};
///
/// let catalog = OptionCatalog::new(ThemeMods::new().with("primary_colour", "#0b5394"))
///     .with_style_override(|mut styles| {
///         styles.push(StyleOption::new("rounded", "Rounded"));
///         styles
///     });
///
/// assert_eq!(catalog.lookup_colour_value("primary").as_deref(), Some("#0b5394"));
/// assert_eq!(catalog.lookup_colour_value("dark").as_deref(), Some("#21111E"));
/// assert_eq!(catalog.style_choices().last().unwrap().key, "rounded");
/// ```
#[derive(Clone)]
pub struct OptionCatalog {
    provider: Arc<dyn ThemeConfigProvider>,
    colour_override: Option<ColourOverride>,
    style_override: Option<StyleOverride>,
}

impl OptionCatalog {
    /// Creates a catalog with no overrides.
    pub fn new(provider: impl ThemeConfigProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            colour_override: None,
            style_override: None,
        }
    }

    /// Installs a function that reshapes the theme colours.
    pub fn with_colour_override<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<ThemeColour>) -> Vec<ThemeColour> + Send + Sync + 'static,
    {
        self.colour_override = Some(Arc::new(f));
        self
    }

    /// Installs a function that reshapes the button styles.
    pub fn with_style_override<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<StyleOption>) -> Vec<StyleOption> + Send + Sync + 'static,
    {
        self.style_override = Some(Arc::new(f));
        self
    }

    /// Theme colours with their literal values, after any override.
    ///
    /// If the override produces a key twice, the first position is kept
    /// with the last value.
    pub fn theme_colours(&self) -> Vec<ThemeColour> {
        let base = BASE_COLOURS
            .iter()
            .map(|(key, theme_mod, default)| {
                let value = self
                    .provider
                    .theme_mod(theme_mod)
                    .unwrap_or_else(|| default.to_string());
                ThemeColour::new(key, value)
            })
            .collect();

        let colours = match &self.colour_override {
            Some(f) => f(base),
            None => base,
        };
        dedupe_by_key(colours, |colour| colour.key.as_str())
    }

    /// One choice per theme colour, same order, label derived from the key.
    pub fn colour_choices(&self) -> Vec<ColourOption> {
        self.theme_colours()
            .iter()
            .map(ColourOption::from_colour)
            .collect()
    }

    /// Button style flags in declaration order, after any override.
    pub fn style_choices(&self) -> Vec<StyleOption> {
        let base = BASE_STYLES
            .iter()
            .map(|(key, label)| StyleOption::new(key, label))
            .collect();

        let styles = match &self.style_override {
            Some(f) => f(base),
            None => base,
        };
        dedupe_by_key(styles, |style| style.key.as_str())
    }

    /// The literal colour value for `key`; `None` when unknown.
    pub fn lookup_colour_value(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        self.theme_colours()
            .into_iter()
            .find(|colour| colour.key == key)
            .map(|colour| colour.value)
    }

    /// Checks that every theme colour value is a CSS colour.
    ///
    /// Nothing calls this implicitly; hosts can run it at startup to catch
    /// a mistyped theme modifier.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for colour in self.theme_colours() {
            if !is_css_colour(&colour.value) {
                return Err(CatalogError::InvalidColour {
                    key: colour.key,
                    value: colour.value,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for OptionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionCatalog")
            .field("colour_override", &self.colour_override.is_some())
            .field("style_override", &self.style_override.is_some())
            .finish_non_exhaustive()
    }
}

/// Derives a display label from a slug: `-` becomes a space and the first
/// character is upper-cased. The rest is left as is.
///
/// ```rust
/// use formstyle::label_from_key;
///
/// assert_eq!(label_from_key("primary"), "Primary");
/// assert_eq!(label_from_key("brand-accent"), "Brand accent");
/// ```
pub fn label_from_key(key: &str) -> String {
    let spaced = key.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn dedupe_by_key<T, K>(items: Vec<T>, key: K) -> Vec<T>
where
    K: Fn(&T) -> &str,
{
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        match out.iter().position(|existing| key(existing) == key(&item)) {
            Some(index) => out[index] = item,
            None => out.push(item),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMods;

    fn keys<T>(items: &[T], key: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|item| key(item).to_string()).collect()
    }

    #[test]
    fn test_label_from_key() {
        assert_eq!(label_from_key("bg"), "Bg");
        assert_eq!(label_from_key("off-white-ish"), "Off white ish");
        assert_eq!(label_from_key("already Caps"), "Already Caps");
        assert_eq!(label_from_key(""), "");
        assert_eq!(label_from_key("-x"), " x");
    }

    #[test]
    fn test_base_colours_in_declaration_order() {
        let catalog = OptionCatalog::new(ThemeMods::new());
        let colours = catalog.theme_colours();
        assert_eq!(
            keys(&colours, |c| c.key.as_str()),
            vec!["primary", "secondary", "tertiary", "dark", "light", "bg"]
        );
    }

    #[test]
    fn test_base_colour_defaults() {
        let catalog = OptionCatalog::new(ThemeMods::new());
        assert_eq!(catalog.lookup_colour_value("primary").as_deref(), Some("#000"));
        assert_eq!(catalog.lookup_colour_value("secondary").as_deref(), Some("#666"));
        assert_eq!(catalog.lookup_colour_value("tertiary").as_deref(), Some("#b5b5b5"));
        assert_eq!(catalog.lookup_colour_value("dark").as_deref(), Some("#21111E"));
        assert_eq!(catalog.lookup_colour_value("light").as_deref(), Some("#fff"));
        assert_eq!(catalog.lookup_colour_value("bg").as_deref(), Some("#fff"));
    }

    #[test]
    fn test_theme_mod_overrides_default() {
        let catalog = OptionCatalog::new(ThemeMods::new().with("bg_colour", "#fafafa"));
        assert_eq!(catalog.lookup_colour_value("bg").as_deref(), Some("#fafafa"));
    }

    #[test]
    fn test_lookup_unknown_or_empty() {
        let catalog = OptionCatalog::new(ThemeMods::new());
        assert_eq!(catalog.lookup_colour_value("chartreuse"), None);
        assert_eq!(catalog.lookup_colour_value(""), None);
    }

    #[test]
    fn test_colour_choices_labels() {
        let catalog = OptionCatalog::new(ThemeMods::new());
        let choices = catalog.colour_choices();
        assert_eq!(choices[0], ColourOption::new("primary", "Primary"));
        assert_eq!(choices[5], ColourOption::new("bg", "Bg"));
    }

    #[test]
    fn test_colour_override_add_and_remove() {
        let catalog = OptionCatalog::new(ThemeMods::new()).with_colour_override(|colours| {
            let mut colours: Vec<_> = colours.into_iter().filter(|c| c.key != "bg").collect();
            colours.push(ThemeColour::new("brand-accent", "#ff6600"));
            colours
        });

        let choices = catalog.colour_choices();
        assert_eq!(choices.len(), 6);
        assert_eq!(
            choices.last(),
            Some(&ColourOption::new("brand-accent", "Brand accent"))
        );
        assert_eq!(catalog.lookup_colour_value("bg"), None);
        assert_eq!(
            catalog.lookup_colour_value("brand-accent").as_deref(),
            Some("#ff6600")
        );
    }

    #[test]
    fn test_colour_override_duplicate_keeps_first_position() {
        let catalog = OptionCatalog::new(ThemeMods::new()).with_colour_override(|mut colours| {
            colours.push(ThemeColour::new("primary", "#123456"));
            colours
        });

        let colours = catalog.theme_colours();
        assert_eq!(colours.len(), 6);
        assert_eq!(colours[0], ThemeColour::new("primary", "#123456"));
    }

    #[test]
    fn test_base_styles() {
        let catalog = OptionCatalog::new(ThemeMods::new());
        let styles = catalog.style_choices();
        assert_eq!(
            keys(&styles, |s| s.key.as_str()),
            vec!["clear", "expanded", "outlined", "big"]
        );
        assert_eq!(styles[2].label, "Outlined");
    }

    #[test]
    fn test_style_override_relabel() {
        let catalog = OptionCatalog::new(ThemeMods::new()).with_style_override(|styles| {
            styles
                .into_iter()
                .map(|mut s| {
                    if s.key == "big" {
                        s.label = "Large".to_string();
                    }
                    s
                })
                .collect()
        });
        assert_eq!(catalog.style_choices()[3], StyleOption::new("big", "Large"));
    }

    #[test]
    fn test_choices_stable_across_calls() {
        let catalog = OptionCatalog::new(ThemeMods::new().with("dark_colour", "#111"));
        assert_eq!(catalog.colour_choices(), catalog.colour_choices());
        assert_eq!(catalog.style_choices(), catalog.style_choices());
    }

    #[test]
    fn test_validate_defaults_ok() {
        let catalog = OptionCatalog::new(ThemeMods::new());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let catalog = OptionCatalog::new(ThemeMods::new().with("light_colour", "#ggg"));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::InvalidColour {
                key: "light".to_string(),
                value: "#ggg".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_values_that_break_out_of_css() {
        for value in ["#000 garbage", "rgb(not, a, colour)", "red;}body{x"] {
            let catalog = OptionCatalog::new(ThemeMods::new().with("primary_colour", value));
            assert_eq!(
                catalog.validate(),
                Err(CatalogError::InvalidColour {
                    key: "primary".to_string(),
                    value: value.to_string(),
                }),
                "{value}"
            );
        }
    }

    #[test]
    fn test_catalog_debug_hides_closures() {
        let catalog = OptionCatalog::new(ThemeMods::new()).with_style_override(|s| s);
        let debug = format!("{:?}", catalog);
        assert!(debug.contains("style_override: true"));
        assert!(debug.contains("colour_override: false"));
    }
}
