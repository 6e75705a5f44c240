//! Icon glyphs used by the widgets
//!
//! The SVG files ship with `gpui-component-assets`; this module only maps the
//! glyphs the widgets need onto the component icon set.

use gpui_component::{Icon, IconName};

/// Glyphs drawn by the input field and data table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetIcon {
    /// Ascending sort indicator
    ChevronUp,
    /// Descending sort indicator
    ChevronDown,
    /// Password is masked, click to reveal
    Eye,
    /// Password is revealed, click to mask
    EyeSlash,
    /// Clear button
    XMark,
    /// Loading spinner
    Spinner,
    /// Checked checkbox
    Check,
    /// Indeterminate checkbox
    Minus,
}

impl WidgetIcon {
    /// The component icon drawn for this glyph
    pub fn icon_name(self) -> IconName {
        match self {
            WidgetIcon::ChevronUp => IconName::ChevronUp,
            WidgetIcon::ChevronDown => IconName::ChevronDown,
            WidgetIcon::Eye => IconName::Eye,
            WidgetIcon::EyeSlash => IconName::EyeOff,
            WidgetIcon::XMark => IconName::Close,
            WidgetIcon::Spinner => IconName::LoaderCircle,
            WidgetIcon::Check => IconName::Check,
            WidgetIcon::Minus => IconName::Minus,
        }
    }
}

impl From<WidgetIcon> for Icon {
    fn from(val: WidgetIcon) -> Self {
        Icon::new(val.icon_name())
    }
}
