//! Checkbox Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::WidgetIcon;
use crate::theme::{Palette, WidgetColors};

/// Visual state of a checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Some but not all of a group is checked
    Indeterminate,
}

impl CheckState {
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    /// The checked value a click asks for.
    ///
    /// An indeterminate box becomes checked.
    pub fn toggled(self) -> bool {
        !self.is_checked()
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    label: Option<SharedString>,
    disabled: bool,
    palette: Palette,
    on_change: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            label: None,
            disabled: false,
            palette: Palette::default(),
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.state = checked.into();
        self
    }

    /// Set the full tri-state value
    pub fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the palette
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = self.state;
        let palette = self.palette;
        let filled = state != CheckState::Unchecked;

        let (bg, border) = if filled {
            (palette.accent, palette.accent)
        } else {
            (palette.checkbox_bg, palette.checkbox_border)
        };

        let mark = match state {
            CheckState::Checked => Some(WidgetIcon::Check),
            CheckState::Indeterminate => Some(WidgetIcon::Minus),
            CheckState::Unchecked => None,
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(16.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border)
                    .bg(bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .when_some(mark, |el, mark| {
                        el.child(
                            Icon::from(mark)
                                .w(px(12.0))
                                .h(px(12.0))
                                .text_color(WidgetColors::white()),
                        )
                    }),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_sm()
                    .text_color(palette.text_primary)
                    .child(label),
            );
        }

        if !self.disabled {
            if let Some(handler) = self.on_change {
                let next = state.toggled();
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    cx.stop_propagation();
                    handler(&next, window, cx);
                });
            }
        } else {
            checkbox = checkbox.opacity(0.5).cursor_not_allowed();
        }

        checkbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_indeterminate_checks() {
        assert!(CheckState::Indeterminate.toggled());
        assert!(CheckState::Unchecked.toggled());
        assert!(!CheckState::Checked.toggled());
    }

    #[test]
    fn from_bool() {
        assert_eq!(CheckState::from(true), CheckState::Checked);
        assert_eq!(CheckState::from(false), CheckState::Unchecked);
    }
}
