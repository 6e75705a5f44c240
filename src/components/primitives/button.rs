//! Button Component
//!
//! Pill buttons used by the demo and storybook controls.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::{Palette, WidgetColors};

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button
    #[default]
    Primary,
    /// Neutral button
    Secondary,
    /// Highlighted while an option is selected
    Toggle(bool),
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    palette: Palette,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            palette: Palette::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the palette
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a toggle button
    pub fn toggle(id: impl Into<ElementId>, label: impl Into<SharedString>, active: bool) -> Self {
        Self::new(id, label).variant(ButtonVariant::Toggle(active))
    }

    fn colors(&self) -> (Rgba, Rgba, Rgba) {
        let palette = self.palette;
        let neutral = if palette.dark {
            (palette.table_header_bg, palette.text_secondary, palette.row_hover)
        } else {
            (gpui::rgb(0xe5e7eb), palette.text_secondary, gpui::rgb(0xd1d5db))
        };
        match self.variant {
            ButtonVariant::Primary | ButtonVariant::Toggle(true) => (
                WidgetColors::accent_strong(),
                WidgetColors::white(),
                gpui::rgb(0x1d4ed8),
            ),
            ButtonVariant::Secondary | ButtonVariant::Toggle(false) => neutral,
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = self.colors();

        let mut element = div()
            .id(self.id)
            .px(px(16.0))
            .py(px(8.0))
            .bg(bg_color)
            .text_color(text_color)
            .text_sm()
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_lg()
            .child(self.label);

        if self.disabled {
            element = element.opacity(0.5).cursor_not_allowed();
        } else {
            element = element.cursor_pointer().hover(move |s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
