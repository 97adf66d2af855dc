use std::sync::Arc;

use formstyle::settings::BUTTON_SECTION;
use formstyle::{
    install, ActivePlugins, FilterTable, FormRecord, FormSettingsFields, IntegrationConfig,
    OptionCatalog, ThemeColour, DISABLE_CSS_HOOK, SETTINGS_FIELDS_HOOK, SUBMIT_BUTTON_HOOK,
};

const PLUGIN: &str = "gravityforms/gravityforms.php";

fn installed(catalog: OptionCatalog) -> FilterTable {
    let config = IntegrationConfig::default();
    let plugins = ActivePlugins::new().with(PLUGIN).with("akismet/akismet.php");
    let mut hooks = FilterTable::new();
    install(&config, Arc::new(catalog), &plugins, &mut hooks).unwrap();
    hooks
}

#[test]
fn test_settings_fields_from_theme() {
    let config = IntegrationConfig::from_yaml_str(
        r##"
theme:
  primary_colour: "#0b5394"
"##,
    )
    .unwrap();
    let hooks = installed(config.catalog());

    let fields = hooks.apply_settings_fields(
        SETTINGS_FIELDS_HOOK,
        FormSettingsFields::new(),
        &FormRecord::new(1, "Contact"),
    );
    let section = fields.section(BUTTON_SECTION).unwrap();
    let colour_values: Vec<_> = section.fields[0]
        .choices
        .iter()
        .map(|c| c.value.as_str())
        .collect();
    assert_eq!(
        colour_values,
        vec!["primary", "secondary", "tertiary", "dark", "light", "bg"]
    );
}

#[test]
fn test_settings_fields_follow_theme_override() {
    let catalog = IntegrationConfig::default()
        .catalog()
        .with_colour_override(|mut colours| {
            colours.push(ThemeColour::new("brand-accent", "#f60"));
            colours
        });
    let hooks = installed(catalog);

    let fields = hooks.apply_settings_fields(
        SETTINGS_FIELDS_HOOK,
        FormSettingsFields::new(),
        &FormRecord::default(),
    );
    let choice = fields.section(BUTTON_SECTION).unwrap().fields[0]
        .choices
        .last()
        .cloned()
        .unwrap();
    assert_eq!(choice.label, "Brand accent");
    assert_eq!(choice.value, "brand-accent");
}

#[test]
fn test_submit_button_rewritten_from_form_record() {
    let hooks = installed(IntegrationConfig::default().catalog());
    let form: FormRecord = serde_json::from_str(
        r#"{
            "id": 4,
            "title": "Newsletter",
            "button_colour": "dark",
            "button_styles_outlined": "1",
            "button_styles_big": ""
        }"#,
    )
    .unwrap();

    let html = hooks.apply_markup(
        SUBMIT_BUTTON_HOOK,
        r#"<input type="submit" value="Send" class="btn">"#.to_string(),
        &form,
    );
    assert_eq!(
        html,
        r#"<button type="submit" class="btn dark outlined">Send</button>"#
    );
}

#[test]
fn test_submit_button_malformed_markup_passes_through() {
    let hooks = installed(IntegrationConfig::default().catalog());
    let markup = r#"<button type="submit">Already a button</button>"#.to_string();
    let html = hooks.apply_markup(SUBMIT_BUTTON_HOOK, markup.clone(), &FormRecord::default());
    assert_eq!(html, markup);
}

#[test]
fn test_default_css_disabled() {
    let hooks = installed(IntegrationConfig::default().catalog());
    assert!(hooks.apply_flag(DISABLE_CSS_HOOK, false));
    assert!(hooks.apply_flag(DISABLE_CSS_HOOK, true));
}

#[test]
fn test_inactive_plugin_leaves_markup_alone() {
    let config = IntegrationConfig::from_yaml_str("environment: development").unwrap();
    let mut hooks = FilterTable::new();
    let err = install(
        &config,
        Arc::new(config.catalog()),
        &ActivePlugins::new().with("akismet/akismet.php"),
        &mut hooks,
    )
    .unwrap_err();
    assert_eq!(err.missing, vec![PLUGIN]);

    let markup = r#"<input type="submit" value="Send">"#.to_string();
    let form = FormRecord::new(1, "f").with_setting("button_colour", "dark");
    assert_eq!(
        hooks.apply_markup(SUBMIT_BUTTON_HOOK, markup.clone(), &form),
        markup
    );
    assert!(!hooks.apply_flag(DISABLE_CSS_HOOK, false));
}
