//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::WidgetStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Locale of the running app, `en` before the store is installed
pub fn current_locale(cx: &App) -> String {
    cx.try_global::<WidgetStore>()
        .map(|store| store.read(cx).locale().to_string())
        .unwrap_or_else(|| "en".to_string())
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("common.{key}"), locale = &locale).into()
}

/// Get translated string from "demo" namespace
pub fn i18n_demo(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("demo.{key}"), locale = &locale).into()
}

/// Get translated string from "form" namespace
pub fn i18n_form(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("form.{key}"), locale = &locale).into()
}

/// Get translated string from "storybook" namespace
pub fn i18n_storybook(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("storybook.{key}"), locale = &locale).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `selected: "{count} user(s) selected"`
/// i18n_format(cx, "demo.selected", &[("count", "2")])
/// // Returns "2 user(s) selected"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = current_locale(cx);
    let mut result = t!(key, locale = &locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
