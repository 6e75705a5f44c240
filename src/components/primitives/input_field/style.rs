//! InputField style maps
//!
//! Size and variant lookups keyed by the closed enums from the model.

use gpui::{px, rgb, rgba, Pixels, Rgba};
use gpui_component::Size;

use super::model::{InputSize, InputVariant};
use crate::theme::{Typography, WidgetColors};

/// Metrics for one field size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeStyle {
    pub text_size: Pixels,
    pub label_size: Pixels,
    pub icon_size: Pixels,
    pub padding_x: Pixels,
    pub height: Pixels,
    /// Size passed to the embedded text editor
    pub component_size: Size,
}

impl InputSize {
    pub fn style(self) -> SizeStyle {
        match self {
            InputSize::Small => SizeStyle {
                text_size: px(Typography::TEXT_SM),
                label_size: px(Typography::TEXT_SM),
                icon_size: px(16.0),
                padding_x: px(12.0),
                height: px(36.0),
                component_size: Size::Small,
            },
            InputSize::Medium => SizeStyle {
                text_size: px(Typography::TEXT_BASE),
                label_size: px(Typography::TEXT_SM),
                icon_size: px(20.0),
                padding_x: px(16.0),
                height: px(44.0),
                component_size: Size::Medium,
            },
            InputSize::Large => SizeStyle {
                text_size: px(Typography::TEXT_LG),
                label_size: px(Typography::TEXT_BASE),
                icon_size: px(24.0),
                padding_x: px(20.0),
                height: px(48.0),
                component_size: Size::Large,
            },
        }
    }
}

/// Colors for one variant in one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    pub background: Rgba,
    pub hover_background: Option<Rgba>,
    pub border: Rgba,
    pub hover_border: Rgba,
    pub focus_border: Rgba,
    pub text: Rgba,
    pub placeholder: Rgba,
    pub shadow: bool,
}

impl InputVariant {
    pub fn style(self, dark: bool, has_error: bool) -> VariantStyle {
        let (text, placeholder) = if dark {
            (rgb(0xffffff), rgb(0x9ca3af))
        } else {
            (rgb(0x111827), rgb(0x6b7280))
        };
        let focus = if dark {
            WidgetColors::accent_dark()
        } else {
            WidgetColors::accent()
        };

        let mut style = match self {
            InputVariant::Filled => VariantStyle {
                background: if dark { rgba(0x1f2937cc) } else { rgba(0xf9fafbcc) },
                hover_background: None,
                border: if dark { rgba(0x37415180) } else { rgba(0xe5e7eb80) },
                hover_border: if dark { rgb(0x4b5563) } else { rgb(0xd1d5db) },
                focus_border: focus,
                text,
                placeholder,
                shadow: true,
            },
            InputVariant::Outlined => VariantStyle {
                background: if dark { rgba(0x11182780) } else { rgba(0xffffffe6) },
                hover_background: None,
                border: if dark { rgba(0x4b5563b3) } else { rgba(0xd1d5dbb3) },
                hover_border: if dark { rgb(0x6b7280) } else { rgb(0x9ca3af) },
                focus_border: focus,
                text,
                placeholder,
                shadow: true,
            },
            InputVariant::Ghost => VariantStyle {
                background: WidgetColors::transparent(),
                hover_background: Some(if dark { rgba(0x1f29374d) } else { rgba(0xf9fafb80) }),
                border: WidgetColors::transparent(),
                hover_border: if dark { rgba(0x4b556380) } else { rgba(0xd1d5db80) },
                focus_border: if dark { rgba(0x60a5fa80) } else { rgba(0x3b82f680) },
                text,
                placeholder,
                shadow: false,
            },
        };

        if has_error {
            style.border = WidgetColors::danger_border();
            style.hover_border = WidgetColors::danger_border();
            style.focus_border = WidgetColors::danger_focus();
            let tint = if dark { rgba(0x7f1d1d33) } else { rgba(0xfef2f280) };
            match self {
                InputVariant::Filled => style.background = tint,
                InputVariant::Outlined => {
                    style.background = if dark { rgba(0x7f1d1d1a) } else { rgba(0xfef2f24d) }
                }
                InputVariant::Ghost => style.hover_background = Some(tint),
            }
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [InputVariant; 3] = [
        InputVariant::Filled,
        InputVariant::Outlined,
        InputVariant::Ghost,
    ];

    #[test]
    fn sizes_grow() {
        let (sm, md, lg) = (
            InputSize::Small.style(),
            InputSize::Medium.style(),
            InputSize::Large.style(),
        );
        assert!(sm.height < md.height && md.height < lg.height);
        assert!(sm.icon_size < md.icon_size && md.icon_size < lg.icon_size);
        assert_eq!(sm.label_size, md.label_size);
    }

    #[test]
    fn error_state_uses_danger_border_for_every_variant() {
        for variant in VARIANTS {
            for dark in [false, true] {
                let style = variant.style(dark, true);
                assert_eq!(style.border, WidgetColors::danger_border(), "{variant:?}");
                assert_eq!(style.focus_border, WidgetColors::danger_focus(), "{variant:?}");
            }
        }
    }

    #[test]
    fn ghost_has_no_chrome_until_hovered() {
        let style = InputVariant::Ghost.style(false, false);
        assert_eq!(style.background, WidgetColors::transparent());
        assert_eq!(style.border, WidgetColors::transparent());
        assert!(style.hover_background.is_some());
        assert!(!style.shadow);
    }

    #[test]
    fn dark_mode_switches_text_color() {
        for variant in VARIANTS {
            assert_ne!(variant.style(false, false).text, variant.style(true, false).text);
        }
    }
}
