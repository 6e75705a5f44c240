//! InputField Component

use std::rc::Rc;
use std::time::Duration;

use gpui::{
    div, percentage, prelude::*, Animation, AnimationExt, App, ClickEvent, Context, Div,
    ElementId, Entity, Focusable, FontWeight, IntoElement, ParentElement, Pixels, Render, SharedString,
    Stateful, Styled, Subscription, Transformation, Window,
};
use gpui_component::{
    input::{Input, InputEvent, InputState},
    Disableable, Icon, Sizable,
};
use tracing::debug;

use super::model::{InputFieldModel, InputFieldProps, MessageKind, ValueChange};
use crate::assets::WidgetIcon;
use crate::theme::Palette;

/// Change handler; receives the new value
pub type ChangeHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A labeled single-line text input
pub struct InputField {
    id: ElementId,
    model: InputFieldModel,
    input_state: Entity<InputState>,
    on_change: Option<ChangeHandler>,
    _subscriptions: Vec<Subscription>,
}

impl InputField {
    /// Create a field whose value is owned by the caller.
    ///
    /// The caller must push every accepted value back with [`Self::set_value`].
    pub fn controlled(
        id: impl Into<ElementId>,
        value: impl Into<String>,
        props: InputFieldProps,
        on_change: impl Fn(&str, &mut Window, &mut App) + 'static,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let model = InputFieldModel::controlled(value, props);
        Self::build(id.into(), model, Some(Rc::new(on_change)), window, cx)
    }

    /// Create a field that keeps its own value, starting at `default_value`
    pub fn uncontrolled(
        id: impl Into<ElementId>,
        default_value: impl Into<String>,
        props: InputFieldProps,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let model = InputFieldModel::uncontrolled(default_value, props);
        Self::build(id.into(), model, None, window, cx)
    }

    fn build(
        id: ElementId,
        model: InputFieldModel,
        on_change: Option<ChangeHandler>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let placeholder = model.props().placeholder.clone().unwrap_or_default();
        let masked = model.is_masked();
        let initial = model.displayed_value().to_string();

        let input_state = cx.new(|cx| {
            let mut state = InputState::new(window, cx)
                .placeholder(placeholder)
                .masked(masked);
            state.set_value(initial, window, cx);
            state
        });

        let subscriptions = vec![cx.subscribe_in(&input_state, window, Self::on_input_event)];

        Self {
            id,
            model,
            input_state,
            on_change,
            _subscriptions: subscriptions,
        }
    }

    // ==================== Getters ====================

    /// The value the field shows
    pub fn value(&self) -> &str {
        self.model.displayed_value()
    }

    pub fn props(&self) -> &InputFieldProps {
        self.model.props()
    }

    // ==================== Setters ====================

    /// Push a new value from the caller
    pub fn set_value(&mut self, value: impl Into<String>, window: &mut Window, cx: &mut Context<Self>) {
        self.model.set_value(value);
        self.sync_input(window, cx);
        cx.notify();
    }

    /// Replace all props at once
    pub fn set_props(&mut self, props: InputFieldProps, window: &mut Window, cx: &mut Context<Self>) {
        *self.model.props_mut() = props;
        self.sync_editor_props(window, cx);
        cx.notify();
    }

    /// Update props in place
    pub fn update_props(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
        update: impl FnOnce(&mut InputFieldProps),
    ) {
        update(self.model.props_mut());
        self.sync_editor_props(window, cx);
        cx.notify();
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.model.props_mut().loading = loading;
        cx.notify();
    }

    /// Set dark mode
    pub fn set_dark_mode(&mut self, dark_mode: bool, cx: &mut Context<Self>) {
        self.model.props_mut().dark_mode = dark_mode;
        cx.notify();
    }

    // ==================== Event handling ====================

    fn on_input_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !matches!(event, InputEvent::Change) {
            return;
        }

        // Echoes of our own syncs equal the displayed value and are ignored by `edit`
        let text = state.read(cx).value().to_string();
        match self.model.edit(&text) {
            Some(change) => self.dispatch(change, window, cx),
            // Rejected edits snap back to the last accepted value
            None => self.sync_input(window, cx),
        }
        cx.notify();
    }

    fn on_clear(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(change) = self.model.clear() else {
            return;
        };
        self.sync_input(window, cx);
        self.dispatch(change, window, cx);
        cx.notify();
    }

    fn on_toggle_password(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.model.toggle_password_visibility() {
            self.sync_editor_props(window, cx);
            cx.notify();
        }
    }

    /// Report a change to the caller once the current update has finished.
    fn dispatch(&mut self, change: ValueChange, window: &mut Window, cx: &mut Context<Self>) {
        debug!(field = %self.id, len = change.value.len(), "Input value changed");

        let Some(handler) = self.on_change.clone() else {
            return;
        };
        let this = cx.entity().downgrade();
        window.defer(cx, move |window, cx| {
            handler(&change.value, window, cx);
            // A controlled field shows whatever the caller pushed back
            this.update(cx, |field, cx| field.sync_input(window, cx)).ok();
        });
    }

    /// Make the editor text match the displayed value
    fn sync_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let value = self.model.displayed_value().to_string();
        if self.input_state.read(cx).value().as_ref() == value.as_str() {
            return;
        }
        self.input_state
            .update(cx, |state, cx| state.set_value(value, window, cx));
    }

    fn sync_editor_props(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let masked = self.model.is_masked();
        let placeholder = self.model.props().placeholder.clone().unwrap_or_default();
        self.input_state.update(cx, |state, cx| {
            state.set_masked(masked, window, cx);
            state.set_placeholder(placeholder, window, cx);
        });
    }

    // ==================== Rendering ====================

    fn render_decorations(
        &self,
        icon_size: Pixels,
        palette: Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let decorations = self.model.decorations();
        let eye = if self.model.password_visible() {
            WidgetIcon::EyeSlash
        } else {
            WidgetIcon::Eye
        };

        div()
            .flex()
            .items_center()
            .gap_2()
            .pl_2()
            .when(decorations.spinner, |el| {
                el.child(
                    Icon::from(WidgetIcon::Spinner)
                        .w(icon_size)
                        .h(icon_size)
                        .text_color(palette.accent)
                        .with_animation(
                            "input-spinner",
                            Animation::new(Duration::from_secs(1)).repeat(),
                            |icon, delta| icon.transform(Transformation::rotate(percentage(delta))),
                        ),
                )
            })
            .when(decorations.clear_button, |el| {
                el.child(
                    decoration_button("input-clear", WidgetIcon::XMark, icon_size, palette)
                        .on_click(cx.listener(Self::on_clear)),
                )
            })
            .when(decorations.password_toggle, |el| {
                el.child(
                    decoration_button("input-password-toggle", eye, icon_size, palette)
                        .on_click(cx.listener(Self::on_toggle_password)),
                )
            })
    }
}

fn decoration_button(
    id: &'static str,
    icon: WidgetIcon,
    size: Pixels,
    palette: Palette,
) -> Stateful<Div> {
    div()
        .id(id)
        .p_1()
        .rounded_full()
        .cursor_pointer()
        .text_color(palette.icon)
        .hover(move |s| s.text_color(palette.icon_hover).bg(palette.icon_hover_bg))
        .child(Icon::from(icon).w(size).h(size))
}

impl Render for InputField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let props = self.model.props().clone();
        let palette = Palette::for_mode(props.dark_mode);
        let size = props.size.style();

        let validation = self.model.validation();
        let has_error = validation.has_error;
        let message = validation.message.map(|m| SharedString::from(m.to_string()));
        let message_color = match validation.kind {
            MessageKind::Error => palette.danger_text,
            MessageKind::Helper => palette.helper,
        };

        let variant = props.variant.style(props.dark_mode, has_error);
        let focused = self.input_state.read(cx).focus_handle(cx).is_focused(window);
        let border = if focused {
            variant.focus_border
        } else {
            variant.border
        };
        let label_color = if has_error {
            palette.danger_text
        } else {
            palette.label
        };
        let disabled = props.disabled;
        let show_decorations = self.model.decorations().any();
        let reserve_trailing = self.model.reserves_trailing_space();

        let field = div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .w_full()
            .h(size.height)
            .px(size.padding_x)
            .rounded_lg()
            .border_1()
            .border_color(border)
            .bg(variant.background)
            .text_size(size.text_size)
            .font_weight(FontWeight::MEDIUM)
            .text_color(variant.text)
            .when(variant.shadow, |el| el.shadow_sm())
            .when(!disabled && !focused, |el| {
                el.hover(move |s| {
                    let s = s.border_color(variant.hover_border);
                    match variant.hover_background {
                        Some(bg) => s.bg(bg),
                        None => s,
                    }
                })
            })
            .when(disabled, |el| el.opacity(0.5).cursor_not_allowed())
            .child(
                div().flex_1().child(
                    Input::new(&self.input_state)
                        .appearance(false)
                        .with_size(size.component_size)
                        .disabled(disabled),
                ),
            )
            .when(show_decorations, |el| {
                el.child(self.render_decorations(size.icon_size, palette, cx))
            })
            // Keep the button slot while buttons are hidden so the text does not shift
            .when(reserve_trailing && !show_decorations, |el| {
                el.child(div().flex_none().pl_2().w(size.icon_size))
            });

        div()
            .w_full()
            .flex()
            .flex_col()
            .when_some(props.label.filter(|l| !l.is_empty()), |el, label| {
                el.child(
                    div()
                        .mb_2()
                        .text_size(size.label_size)
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(label_color)
                        .child(label),
                )
            })
            .child(field)
            .when_some(message, |el, message| {
                el.child(
                    div()
                        .mt_2()
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(message_color)
                        .child(message),
                )
            })
    }
}
