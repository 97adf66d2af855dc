//! Submit button rewriting.
//!
//! Form plugins render their submit control as
//! `<input type="submit" value="Send" ...>`. Themes want a `<button>` so
//! the label can be styled like any other button. [`transform_submit_button`]
//! performs that swap and appends the form's colour and style classes.

use formstyle_markup::{Attribute, Element, Fragment, Node};

use crate::catalog::StyleOption;
use crate::error::MalformedMarkupError;
use crate::options::FormButtonOptions;

/// Whether `element` is an `<input type="submit">` control.
pub fn is_submit_control(element: &Element) -> bool {
    element.name() == "input"
        && element
            .get_attribute("type")
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("submit"))
}

/// The class tokens contributed by `options`, each preceded by a space.
///
/// The colour comes first, then selected styles in `known_styles` order.
/// Selected styles missing from `known_styles` contribute nothing.
pub fn class_suffix(options: &FormButtonOptions, known_styles: &[StyleOption]) -> String {
    let mut suffix = String::new();
    if let Some(colour) = &options.colour {
        suffix.push(' ');
        suffix.push_str(colour);
    }
    for style in known_styles {
        if options.styles.contains(&style.key) {
            suffix.push(' ');
            suffix.push_str(&style.key);
        }
    }
    suffix
}

/// `base` followed by [`class_suffix`]. Tokens are never de-duplicated.
///
/// ```rust
/// use formstyle::{compose_classes, FormButtonOptions, StyleOption};
///
/// let styles = [StyleOption::new("clear", "Clear"), StyleOption::new("big", "Big")];
/// let options = FormButtonOptions::new().with_colour("primary").with_style("big");
/// assert_eq!(compose_classes("btn primary", &options, &styles), "btn primary primary big");
/// ```
pub fn compose_classes(
    base: &str,
    options: &FormButtonOptions,
    known_styles: &[StyleOption],
) -> String {
    format!("{}{}", base, class_suffix(options, known_styles))
}

/// Rewrites the first submit control in `markup` as a `<button>`.
///
/// The control's `value` becomes the button text; every other attribute is
/// copied in source order. The `class` attribute is extended with the
/// colour and style classes from `options` (see [`compose_classes`]) and is
/// added at the end when the control had none. Only the new button is
/// returned, not the surrounding markup.
///
/// # Errors
///
/// - [`MalformedMarkupError::Unparseable`] if `markup` cannot be parsed
/// - [`MalformedMarkupError::MissingSubmitControl`] if it holds no
///   `<input type="submit">`
pub fn transform_submit_button(
    markup: &str,
    options: &FormButtonOptions,
    known_styles: &[StyleOption],
) -> Result<String, MalformedMarkupError> {
    let mut fragment = Fragment::parse(markup)?;
    let path = fragment
        .find(is_submit_control)
        .ok_or(MalformedMarkupError::MissingSubmitControl)?;
    let control = fragment
        .element(&path)
        .ok_or(MalformedMarkupError::MissingSubmitControl)?;

    let mut button = button_from_control(control);
    let mut class = button
        .attribute("class")
        .cloned()
        .unwrap_or_else(|| Attribute::from_raw("class", ""));
    class.append_value(&class_suffix(options, known_styles));
    button.put_attribute(class);

    fragment.replace(&path, Node::Element(button));
    let html = fragment
        .element(&path)
        .map(Element::to_html)
        .ok_or(MalformedMarkupError::MissingSubmitControl)?;

    tracing::debug!(markup = %html, "rewrote submit control as button");
    Ok(html)
}

fn button_from_control(control: &Element) -> Element {
    let mut button = Element::new("button");
    for attr in control.attributes() {
        if attr.name() != "value" {
            button.put_attribute(attr.clone());
        }
    }
    if let Some(value) = control.attribute("value") {
        button.push_child(Node::text_from_attribute(value));
    }
    button
}
