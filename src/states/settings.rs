//! Application Settings
//!
//! Persisted preferences shared by the demo app and the storybook.

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{App, AppContext, Context, Entity, Global};
use locale_config::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Locales with translations
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Map a system locale tag onto a supported locale
pub fn normalize_locale(tag: &str) -> &'static str {
    let tag = tag.trim().to_ascii_lowercase();
    if tag.starts_with("zh") {
        "zh-CN"
    } else {
        "en"
    }
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    dark_mode: bool,
    locale: Option<String>,
    /// Story shown when the storybook starts without an id
    last_story: Option<String>,
}

impl AppSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
        })?;

        if settings.locale.as_deref().is_none_or(str::is_empty) {
            settings.locale = Some(normalize_locale(&Locale::current().to_string()).to_string());
        }

        Ok(settings)
    }

    /// Parse settings; an empty document gives the defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    /// Create new default settings
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    pub fn last_story(&self) -> Option<&str> {
        self.last_story.as_deref()
    }

    // ==================== Setters ====================

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    /// Switch to the next supported locale
    pub fn cycle_locale(&mut self) {
        let current = SUPPORTED_LOCALES
            .iter()
            .position(|l| *l == self.locale())
            .unwrap_or(0);
        let next = SUPPORTED_LOCALES[(current + 1) % SUPPORTED_LOCALES.len()];
        self.locale = Some(next.to_string());
    }

    pub fn set_last_story(&mut self, id: Option<String>) {
        self.last_story = id;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<WidgetStore>()`
#[derive(Clone)]
pub struct WidgetStore {
    settings: Entity<AppSettings>,
}

impl WidgetStore {
    pub fn new(settings: Entity<AppSettings>) -> Self {
        Self { settings }
    }

    /// Load settings from disk, falling back to defaults, and install the store
    pub fn init(cx: &mut App) -> Self {
        let settings = AppSettings::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load settings, using defaults");
            AppSettings::new()
        });
        let store = Self::new(cx.new(|_| settings));
        cx.set_global(store.clone());
        store
    }

    /// Get the settings entity
    pub fn settings(&self) -> Entity<AppSettings> {
        self.settings.clone()
    }

    /// Read settings
    pub fn read<'a>(&self, cx: &'a App) -> &'a AppSettings {
        self.settings.read(cx)
    }

    /// Update settings
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AppSettings, &mut Context<AppSettings>) -> R,
    ) -> C::Result<R> {
        self.settings.update(cx, update)
    }
}

impl Global for WidgetStore {}

// ==================== Persistence ====================

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(settings)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update settings and save to disk in the background
pub fn update_settings_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AppSettings) + 'static,
{
    let store = cx.global::<WidgetStore>().clone();

    cx.spawn(async move |cx| {
        let current = store.update(cx, |settings, cx| {
            mutation(settings);
            cx.notify();
            settings.clone()
        });

        if let Ok(settings) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_settings(&settings) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = AppSettings::parse("  \n").expect("parse");
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.locale(), "en");
        assert!(!settings.dark_mode());
    }

    #[test]
    fn parses_saved_settings() {
        let settings = AppSettings::parse(
            "dark_mode = true\nlocale = \"zh-CN\"\nlast_story = \"datatable--loading\"\n",
        )
        .expect("parse");
        assert!(settings.dark_mode());
        assert_eq!(settings.locale(), "zh-CN");
        assert_eq!(settings.last_story(), Some("datatable--loading"));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let settings = AppSettings::parse("dark_mode = true\n").expect("parse");
        assert!(settings.dark_mode());
        assert_eq!(settings.last_story(), None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(AppSettings::parse("dark_mode = [").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut settings = AppSettings::new();
        settings.set_dark_mode(true);
        settings.set_last_story(Some("inputfield--password".into()));
        let text = toml::to_string(&settings).expect("serialize");
        assert_eq!(AppSettings::parse(&text).expect("parse"), settings);
    }

    #[test]
    fn locale_normalization() {
        assert_eq!(normalize_locale("zh-Hans-CN"), "zh-CN");
        assert_eq!(normalize_locale("ZH_TW"), "zh-CN");
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("de-DE"), "en");
    }

    #[test]
    fn cycle_locale_wraps() {
        let mut settings = AppSettings::new();
        settings.cycle_locale();
        assert_eq!(settings.locale(), "zh-CN");
        settings.cycle_locale();
        assert_eq!(settings.locale(), "en");
    }
}
