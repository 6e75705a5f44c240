//! Workspace - Demo Gallery
//!
//! Every InputField configuration, the sign-up form and the user tables,
//! laid out as one scrolling page.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, rgb, ClickEvent, Context, Div, Entity, FontWeight, IntoElement,
    ParentElement, Render, Rgba, SharedString, Styled, Subscription, Window,
};
use tracing::{debug, info};

use super::fields::DemoField;
use super::users::{sample_users, user_columns, User};
use crate::components::composite::data_table::DataTable;
use crate::components::primitives::button::Button;
use crate::components::primitives::input_field::InputField;
use crate::constants::{INPUT_LOADING_MS, TABLE_LOADING_MS};
use crate::helpers::ViewAction;
use crate::states::{
    i18n_common, i18n_demo, i18n_form, i18n_format, FormData, FormField, WidgetStore,
};
use crate::theme::{Palette, Typography, WidgetColors};

/// Main view of the demo window
pub struct Workspace {
    form: FormData,
    fields: Vec<(DemoField, Entity<InputField>)>,
    users_table: Entity<DataTable<User>>,
    empty_table: Entity<DataTable<User>>,
    /// Input loading simulation running
    loading: bool,
    /// Table loading simulation running
    table_loading: bool,
    selected_count: usize,
    dark_mode: bool,
    locale: String,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<WidgetStore>().clone();
        let (dark_mode, locale) = {
            let settings = store.read(cx);
            (settings.dark_mode(), settings.locale().to_string())
        };

        let form = FormData::default();
        let errors = form.validate();
        let this = cx.weak_entity();

        let fields = DemoField::ALL
            .into_iter()
            .map(|field| {
                let props = field.props(&errors, false, dark_mode, |key| {
                    i18n_form(cx, key).to_string()
                });
                let id = SharedString::from(format!("demo-{}", field.key()));
                let entity = match field.binding() {
                    Some(binding) => {
                        let this = this.clone();
                        let value = form.get(binding).to_string();
                        cx.new(|cx| {
                            InputField::controlled(
                                id,
                                value,
                                props,
                                move |value, window, cx| {
                                    this.update(cx, |workspace, cx| {
                                        workspace.on_field_change(binding, value, window, cx)
                                    })
                                    .ok();
                                },
                                window,
                                cx,
                            )
                        })
                    }
                    None => cx.new(|cx| InputField::uncontrolled(id, "", props, window, cx)),
                };
                (field, entity)
            })
            .collect();

        let on_select = this.clone();
        let users_table = cx.new(|cx| {
            DataTable::new(user_columns(dark_mode, cx), sample_users(), cx)
                .selectable(true)
                .dark_mode(dark_mode)
                .empty_message(i18n_demo(cx, "empty_users"))
                .on_row_select(move |rows, _window, cx| {
                    on_select
                        .update(cx, |workspace, cx| workspace.on_users_selected(rows, cx))
                        .ok();
                })
        });
        let empty_table = cx.new(|cx| {
            DataTable::new(user_columns(dark_mode, cx), Vec::new(), cx)
                .selectable(true)
                .dark_mode(dark_mode)
                .empty_message(i18n_demo(cx, "empty_demo_message"))
        });

        let subscriptions = vec![cx.observe_in(
            &store.settings(),
            window,
            |this, settings, window, cx| {
                let (dark_mode, locale) = {
                    let settings = settings.read(cx);
                    (settings.dark_mode(), settings.locale().to_string())
                };
                this.on_settings_changed(dark_mode, locale, window, cx);
            },
        )];

        info!(fields = DemoField::ALL.len(), "Demo workspace ready");

        Self {
            form,
            fields,
            users_table,
            empty_table,
            loading: false,
            table_loading: false,
            selected_count: 0,
            dark_mode,
            locale,
            _subscriptions: subscriptions,
        }
    }

    fn field(&self, field: DemoField) -> Option<Entity<InputField>> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, entity)| entity.clone())
    }

    /// Recompute props of every field from the form, flags and locale
    fn refresh_fields(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let errors = self.form.validate();
        for (field, entity) in &self.fields {
            let props = field.props(&errors, self.loading, self.dark_mode, |key| {
                i18n_form(cx, key).to_string()
            });
            entity.update(cx, |input, cx| {
                if *input.props() != props {
                    input.set_props(props, window, cx);
                }
            });
        }
        cx.notify();
    }

    // ==================== Event handling ====================

    fn on_field_change(
        &mut self,
        binding: FormField,
        value: &str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.form.set(binding, value) {
            return;
        }
        debug!(field = ?binding, "Form value changed");

        for (field, entity) in &self.fields {
            if field.binding() == Some(binding) {
                entity.update(cx, |input, cx| input.set_value(value, window, cx));
            }
        }
        self.refresh_fields(window, cx);
    }

    fn on_users_selected(&mut self, rows: &[User], cx: &mut Context<Self>) {
        debug!(count = rows.len(), "Users selected");
        self.selected_count = rows.len();
        cx.notify();
    }

    fn on_settings_changed(
        &mut self,
        dark_mode: bool,
        locale: String,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if dark_mode == self.dark_mode && locale == self.locale {
            return;
        }
        self.dark_mode = dark_mode;
        self.locale = locale;

        self.users_table.update(cx, |table, cx| {
            table.set_dark_mode(dark_mode, cx);
            table.set_columns(user_columns(dark_mode, cx), cx);
            table.set_empty_message(i18n_demo(cx, "empty_users"), cx);
        });
        self.empty_table.update(cx, |table, cx| {
            table.set_dark_mode(dark_mode, cx);
            table.set_columns(user_columns(dark_mode, cx), cx);
            table.set_empty_message(i18n_demo(cx, "empty_demo_message"), cx);
        });
        self.refresh_fields(window, cx);
    }

    fn simulate_loading(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.loading {
            return;
        }
        info!("Simulating input loading");
        self.loading = true;
        self.refresh_fields(window, cx);

        cx.spawn_in(window, async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(INPUT_LOADING_MS))
                .await;
            this.update_in(cx, |this, window, cx| {
                this.loading = false;
                this.refresh_fields(window, cx);
            })
            .ok();
        })
        .detach();
    }

    fn simulate_table_loading(&mut self, _: &ClickEvent, _: &mut Window, cx: &mut Context<Self>) {
        if self.table_loading {
            return;
        }
        info!("Simulating table loading");
        self.table_loading = true;
        self.users_table
            .update(cx, |table, cx| table.set_loading(true, cx));

        let table = self.users_table.clone();
        cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(TABLE_LOADING_MS))
                .await;
            this.update(cx, |this, cx| {
                this.table_loading = false;
                table.update(cx, |table, cx| table.set_loading(false, cx));
                cx.notify();
            })
            .ok();
        })
        .detach();
        cx.notify();
    }

    // ==================== Rendering ====================

    fn render_header(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let dark = self.dark_mode;
        let mode_label = |active: bool, text: SharedString| {
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(if active { palette.accent } else { palette.text_muted })
                .child(text)
        };
        let locale_label = if self.locale == "en" { "EN" } else { "中文" };

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_center()
                    .size(px(64.0))
                    .rounded_full()
                    .bg(if dark { rgb(0x1e3a8a) } else { rgb(0xdbeafe) })
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_lg()
                            .bg(if dark { rgb(0x3b82f6) } else { rgb(0x2563eb) }),
                    ),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_4XL))
                    .font_weight(FontWeight::BOLD)
                    .child(i18n_demo(cx, "title")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(palette.text_secondary)
                    .child(i18n_demo(cx, "subtitle")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(mode_label(!dark, i18n_common(cx, "light_mode")))
                    .child(
                        div()
                            .id("dark-mode-switch")
                            .flex()
                            .items_center()
                            .w(px(48.0))
                            .h(px(28.0))
                            .px(px(4.0))
                            .rounded_full()
                            .cursor_pointer()
                            .shadow_md()
                            .bg(if dark { palette.accent } else { rgb(0xd1d5db) })
                            .when(dark, |el| el.justify_end())
                            .on_click(|_, window, cx| {
                                window.dispatch_action(Box::new(ViewAction::ToggleDarkMode), cx)
                            })
                            .child(
                                div()
                                    .size(px(20.0))
                                    .rounded_full()
                                    .bg(WidgetColors::white())
                                    .shadow_sm(),
                            ),
                    )
                    .child(mode_label(dark, i18n_common(cx, "dark_mode")))
                    .child(
                        Button::secondary("locale-toggle", locale_label)
                            .palette(palette)
                            .on_click(|_, window, cx| {
                                window.dispatch_action(Box::new(ViewAction::ToggleLocale), cx)
                            }),
                    ),
            )
    }

    fn render_fields(&self, fields: &[DemoField]) -> Div {
        div()
            .flex()
            .flex_col()
            .gap_6()
            .children(fields.iter().filter_map(|f| self.field(*f)))
    }

    fn render_states(&self, palette: Palette, cx: &mut Context<Self>) -> Div {
        let label = if self.loading {
            i18n_common(cx, "loading")
        } else {
            i18n_common(cx, "simulate_loading")
        };

        self.render_fields(&[DemoField::Search, DemoField::Disabled, DemoField::Loading])
            .child(
                div().child(
                    Button::primary("simulate-input-loading", label)
                        .palette(palette)
                        .disabled(self.loading)
                        .on_click(cx.listener(Self::simulate_loading)),
                ),
            )
            .children(self.field(DemoField::Error))
    }

    fn render_table_controls(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let label = if self.table_loading {
            i18n_common(cx, "loading")
        } else {
            i18n_common(cx, "simulate_loading")
        };
        let selected = (self.selected_count > 0).then(|| {
            i18n_format(
                cx,
                "demo.selected",
                &[("count", &self.selected_count.to_string())],
            )
        });
        let (badge_bg, badge_text) = if self.dark_mode {
            (rgb(0x1e3a8a), rgb(0xbfdbfe))
        } else {
            (rgb(0xdbeafe), rgb(0x1e40af))
        };

        div()
            .flex()
            .flex_wrap()
            .items_center()
            .justify_between()
            .gap_4()
            .child(
                Button::secondary("simulate-table-loading", label)
                    .palette(palette)
                    .disabled(self.table_loading)
                    .on_click(cx.listener(Self::simulate_table_loading)),
            )
            .when_some(selected, |el, selected| {
                el.child(
                    div()
                        .px_4()
                        .py_2()
                        .rounded_lg()
                        .bg(badge_bg)
                        .text_color(badge_text)
                        .child(selected),
                )
            })
    }
}

/// A titled card with a colored marker
fn section(palette: Palette, title: SharedString, marker: Rgba, title_size: f32) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_6()
        .p_8()
        .rounded_2xl()
        .border_1()
        .border_color(palette.surface_border)
        .bg(palette.surface)
        .shadow_lg()
        .child(
            div()
                .flex()
                .items_center()
                .gap_4()
                .child(div().w(px(8.0)).h(px(32.0)).rounded_full().bg(marker))
                .child(
                    div()
                        .text_size(px(title_size))
                        .font_weight(FontWeight::BOLD)
                        .text_color(palette.text_primary)
                        .child(title),
                ),
        )
}

fn subtitle(palette: Palette, text: SharedString) -> Div {
    div().text_color(palette.text_secondary).child(text)
}

fn two_columns(left: Div, right: Div) -> Div {
    div()
        .flex()
        .gap_8()
        .child(div().flex_1().child(left))
        .child(div().flex_1().child(right))
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Palette::for_mode(self.dark_mode);
        let dark = self.dark_mode;
        let marker = |light: u32, dark_color: u32| rgb(if dark { dark_color } else { light });

        let basic = section(palette, i18n_demo(cx, "basic_examples"), marker(0x3b82f6, 0x60a5fa), Typography::TEXT_2XL)
            .child(self.render_fields(&DemoField::BASIC));
        let variants = section(palette, i18n_demo(cx, "variants"), marker(0xa855f7, 0xc084fc), Typography::TEXT_2XL)
            .child(self.render_fields(&DemoField::VARIANTS));
        let sizes = section(palette, i18n_demo(cx, "sizes"), marker(0x22c55e, 0x4ade80), Typography::TEXT_2XL)
            .child(self.render_fields(&DemoField::SIZES));
        let states = section(palette, i18n_demo(cx, "states_features"), marker(0xf97316, 0xfb923c), Typography::TEXT_2XL)
            .child(self.render_states(palette, cx));
        let form = section(palette, i18n_demo(cx, "complete_form"), marker(0x6366f1, 0x818cf8), Typography::TEXT_2XL)
            .child(self.render_fields(&DemoField::FORM));

        let table = section(palette, i18n_demo(cx, "table_title"), marker(0x22c55e, 0x4ade80), Typography::TEXT_2XL)
            .child(subtitle(palette, i18n_demo(cx, "table_subtitle")).text_size(px(Typography::TEXT_LG)))
            .child(self.render_table_controls(palette, cx))
            .child(self.users_table.clone());

        let empty = section(palette, i18n_demo(cx, "empty_demo_title"), marker(0xf97316, 0xfb923c), Typography::TEXT_XL)
            .child(subtitle(palette, i18n_demo(cx, "empty_demo_subtitle")))
            .child(self.empty_table.clone());

        div()
            .id("demo-workspace")
            .size_full()
            .overflow_y_scroll()
            .bg(palette.background)
            .text_color(palette.text_primary)
            .child(
                div()
                    .max_w(px(1152.0))
                    .mx_auto()
                    .px_4()
                    .py_8()
                    .flex()
                    .flex_col()
                    .gap_8()
                    .child(self.render_header(palette, cx))
                    .child(two_columns(basic, variants))
                    .child(two_columns(sizes, states))
                    .child(form)
                    .child(table)
                    .child(empty),
            )
    }
}
