//! Colors - Widget Theme Colors
//!
//! Fixed accent colors are associated functions on [`WidgetColors`]. Everything
//! that changes with dark mode lives in a [`Palette`] resolved once per render.

use gpui::{rgb, rgba, Rgba};

/// Fixed color palette shared by both modes
pub struct WidgetColors;

impl WidgetColors {
    // Accent colors
    /// Primary accent - Blue 500
    pub fn accent() -> Rgba { rgb(0x3b82f6) }
    /// Primary accent on dark backgrounds - Blue 400
    pub fn accent_dark() -> Rgba { rgb(0x60a5fa) }
    /// Strong accent for buttons - Blue 600
    pub fn accent_strong() -> Rgba { rgb(0x2563eb) }

    // Status colors
    /// Error border - Red 400
    pub fn danger_border() -> Rgba { rgb(0xf87171) }
    /// Error border while focused - Red 500
    pub fn danger_focus() -> Rgba { rgb(0xef4444) }
    /// Error text - Red 600
    pub fn danger_text() -> Rgba { rgb(0xdc2626) }
    /// Error text on dark backgrounds - Red 400
    pub fn danger_text_dark() -> Rgba { rgb(0xf87171) }

    // Neutral
    /// Transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }
    /// Skeleton placeholder block - Gray 300
    pub fn skeleton() -> Rgba { rgb(0xd1d5db) }
    /// Inactive sort chevron - Gray 300
    pub fn chevron_inactive() -> Rgba { rgb(0xd1d5db) }
    /// White
    pub fn white() -> Rgba { rgb(0xffffff) }
}

/// Mode dependent colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark: bool,
    /// Window background
    pub background: Rgba,
    /// Card / section background
    pub surface: Rgba,
    /// Card border
    pub surface_border: Rgba,
    /// Table body background
    pub table_bg: Rgba,
    /// Table header background
    pub table_header_bg: Rgba,
    /// Table header text
    pub table_header_text: Rgba,
    /// Table border and row dividers
    pub table_border: Rgba,
    /// Hovered row
    pub row_hover: Rgba,
    /// Selected row
    pub row_selected: Rgba,
    /// Primary text
    pub text_primary: Rgba,
    /// Secondary text
    pub text_secondary: Rgba,
    /// Muted text
    pub text_muted: Rgba,
    /// Field label
    pub label: Rgba,
    /// Helper text below a field
    pub helper: Rgba,
    /// Placeholder text
    pub placeholder: Rgba,
    /// Decoration icon
    pub icon: Rgba,
    /// Decoration icon while hovered
    pub icon_hover: Rgba,
    /// Decoration button hover background
    pub icon_hover_bg: Rgba,
    /// Checkbox background
    pub checkbox_bg: Rgba,
    /// Checkbox border
    pub checkbox_border: Rgba,
    /// Accent for focus and checked states
    pub accent: Rgba,
    /// Error text
    pub danger_text: Rgba,
}

impl Palette {
    /// Light mode palette
    pub fn light() -> Self {
        Self {
            dark: false,
            background: rgb(0xeff6ff),
            surface: rgba(0xffffffcc),
            surface_border: rgba(0xe5e7eb80),
            table_bg: rgb(0xffffff),
            table_header_bg: rgb(0xf9fafb),
            table_header_text: rgb(0x6b7280),
            table_border: rgb(0xe5e7eb),
            row_hover: rgb(0xf9fafb),
            row_selected: rgb(0xeff6ff),
            text_primary: rgb(0x111827),
            text_secondary: rgb(0x4b5563),
            text_muted: rgb(0x6b7280),
            label: rgb(0x374151),
            helper: rgb(0x4b5563),
            placeholder: rgb(0x6b7280),
            icon: rgb(0x9ca3af),
            icon_hover: rgb(0x4b5563),
            icon_hover_bg: rgba(0xf3f4f680),
            checkbox_bg: rgb(0xffffff),
            checkbox_border: rgb(0xd1d5db),
            accent: WidgetColors::accent(),
            danger_text: WidgetColors::danger_text(),
        }
    }

    /// Dark mode palette
    pub fn dark() -> Self {
        Self {
            dark: true,
            background: rgb(0x111827),
            surface: rgba(0x1f2937cc),
            surface_border: rgba(0x37415180),
            table_bg: rgb(0x1f2937),
            table_header_bg: rgb(0x374151),
            table_header_text: rgb(0xd1d5db),
            table_border: rgb(0x374151),
            row_hover: rgb(0x374151),
            row_selected: rgba(0x1e3a8a40),
            text_primary: rgb(0xffffff),
            text_secondary: rgb(0xd1d5db),
            text_muted: rgb(0x9ca3af),
            label: rgb(0xe5e7eb),
            helper: rgb(0x9ca3af),
            placeholder: rgb(0x9ca3af),
            icon: rgb(0x9ca3af),
            icon_hover: rgb(0xe5e7eb),
            icon_hover_bg: rgba(0x37415180),
            checkbox_bg: rgb(0x374151),
            checkbox_border: rgb(0x4b5563),
            accent: WidgetColors::accent_dark(),
            danger_text: WidgetColors::danger_text_dark(),
        }
    }

    /// Pick the palette for a dark mode flag
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mode_selects_palette() {
        assert!(!Palette::for_mode(false).dark);
        assert!(Palette::for_mode(true).dark);
        assert_eq!(Palette::for_mode(true), Palette::dark());
    }

    #[test]
    fn dark_palette_inverts_primary_text() {
        assert_ne!(Palette::light().text_primary, Palette::dark().text_primary);
        assert_eq!(Palette::dark().text_primary, WidgetColors::white());
    }
}
