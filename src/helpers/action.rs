//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Appearance actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ViewAction {
    /// Switch between light and dark mode
    ToggleDarkMode,
    /// Switch the interface language
    ToggleLocale,
}

/// Storybook navigation
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum StoryAction {
    /// Select the next story in the catalog
    Next,
    /// Select the previous story in the catalog
    Previous,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⇧ for shift
/// - Others: Ctrl+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let (separator, secondary, shift) = ("", "⌘", "⇧");
    #[cfg(not(target_os = "macos"))]
    let (separator, secondary, shift) = ("+", "Ctrl", "Shift");

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" | "ctrl" => secondary.to_string(),
            "shift" => shift.to_string(),
            "alt" => "Alt".to_string(),
            "up" => "↑".to_string(),
            "down" => "↓".to_string(),
            other => other.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Appearance
        KeyBinding::new("secondary-shift-d", ViewAction::ToggleDarkMode, None),
        KeyBinding::new("secondary-shift-l", ViewAction::ToggleLocale, None),
        // Storybook
        KeyBinding::new("alt-down", StoryAction::Next, None),
        KeyBinding::new("alt-up", StoryAction::Previous, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_plain_keys() {
        #[cfg(not(target_os = "macos"))]
        {
            assert_eq!(humanize_keystroke("secondary-shift-d"), "Ctrl+Shift+D");
            assert_eq!(humanize_keystroke("alt-down"), "Alt+↓");
        }
        #[cfg(target_os = "macos")]
        {
            assert_eq!(humanize_keystroke("secondary-shift-d"), "⌘⇧D");
        }
    }
}
