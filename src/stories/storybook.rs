//! Storybook View
//!
//! Catalog sidebar, controls panel and the canvas rendering the selected story.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, FocusHandle, FontWeight, IntoElement,
    ParentElement, Render, SharedString, Styled, Subscription, Window,
};
use serde_json::Value;
use tracing::{debug, info};

use super::args::StoryArgs;
use super::catalog::{adjacent_index, story_catalog, Story};
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::primitives::button::Button;
use crate::components::primitives::input_field::{InputField, InputSize, InputVariant};
use crate::constants::STORY_SIDEBAR_WIDTH;
use crate::helpers::{humanize_keystroke, StoryAction, ViewAction};
use crate::states::{i18n_storybook, update_settings_and_save, WidgetStore};
use crate::theme::{Palette, Typography};

/// Widgets currently on the canvas
enum StoryCanvas {
    Fields(Vec<Entity<InputField>>),
    Table(Entity<DataTable<Value>>),
}

/// Columns of the people table used by the DataTable stories
fn people_columns() -> Vec<Column<Value>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").flex_width(Some(220.0), None),
        Column::new("age", "Age").sortable().fixed_width(100.0),
    ]
}

pub struct Storybook {
    stories: Vec<Story>,
    selected: usize,
    canvas: StoryCanvas,
    /// Last selection reported by the table story
    event_log: Option<SharedString>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Storybook {
    /// Open the catalog at `selected`
    pub fn new(selected: usize, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<WidgetStore>().clone();
        let dark_mode = store.read(cx).dark_mode();

        let mut stories = story_catalog();
        for story in &mut stories {
            story.args.set_dark_mode(dark_mode);
        }
        let selected = selected.min(stories.len().saturating_sub(1));

        let subscriptions = vec![cx.observe_in(&store.settings(), window, |this, settings, window, cx| {
            let dark_mode = settings.read(cx).dark_mode();
            if this.current().args.dark_mode() != dark_mode {
                for story in &mut this.stories {
                    story.args.set_dark_mode(dark_mode);
                }
                this.apply_args(window, cx);
            }
            cx.notify();
        })];

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        let mut this = Self {
            stories,
            selected,
            canvas: StoryCanvas::Fields(Vec::new()),
            event_log: None,
            focus_handle,
            _subscriptions: subscriptions,
        };
        this.canvas = this.build_canvas(window, cx);
        this
    }

    fn current(&self) -> &Story {
        &self.stories[self.selected]
    }

    fn current_mut(&mut self) -> &mut Story {
        &mut self.stories[self.selected]
    }

    // ==================== Canvas ====================

    fn build_canvas(&self, window: &mut Window, cx: &mut Context<Self>) -> StoryCanvas {
        let story = self.current();
        let this = cx.weak_entity();

        match &story.args {
            StoryArgs::InputField(args) => {
                let props = story.layout.field_props(&args.props);
                let single = props.len() == 1;
                let fields = props
                    .into_iter()
                    .enumerate()
                    .map(|(index, props)| {
                        let id = SharedString::from(format!("{}-{index}", story.id));
                        let value = args.value.clone();
                        if single {
                            let this = this.clone();
                            cx.new(|cx| {
                                InputField::controlled(
                                    id,
                                    value,
                                    props,
                                    move |value, window, cx| {
                                        this.update(cx, |story, cx| {
                                            story.on_value_change(value, window, cx)
                                        })
                                        .ok();
                                    },
                                    window,
                                    cx,
                                )
                            })
                        } else {
                            cx.new(|cx| InputField::uncontrolled(id, value, props, window, cx))
                        }
                    })
                    .collect();
                StoryCanvas::Fields(fields)
            }
            StoryArgs::DataTable(args) => {
                let args = args.clone();
                let table = cx.new(|cx| {
                    DataTable::new(people_columns(), args.data.clone(), cx)
                        .selectable(args.selectable)
                        .loading(args.loading)
                        .empty_message(args.empty_message().to_string())
                        .dark_mode(args.dark_mode)
                        .on_row_select(move |rows, _window, cx| {
                            this.update(cx, |story, cx| story.on_rows_selected(rows, cx))
                                .ok();
                        })
                });
                StoryCanvas::Table(table)
            }
        }
    }

    /// Push the current args into the widgets on the canvas
    fn apply_args(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let story = self.current().clone();
        let applied = match (&self.canvas, &story.args) {
            (StoryCanvas::Fields(fields), StoryArgs::InputField(args)) => {
                let props = story.layout.field_props(&args.props);
                for (field, props) in fields.iter().zip(props) {
                    field.update(cx, |field, cx| field.set_props(props, window, cx));
                }
                true
            }
            (StoryCanvas::Table(table), StoryArgs::DataTable(args)) => {
                table.update(cx, |table, cx| {
                    table.set_loading(args.loading, cx);
                    table.set_selectable(args.selectable, cx);
                    table.set_dark_mode(args.dark_mode, cx);
                    table.set_empty_message(args.empty_message().to_string(), cx);
                });
                true
            }
            _ => false,
        };
        if !applied {
            self.canvas = self.build_canvas(window, cx);
        }
        cx.notify();
    }

    // ==================== Event handling ====================

    fn select_story(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if index == self.selected || index >= self.stories.len() {
            return;
        }
        self.selected = index;
        self.event_log = None;
        self.canvas = self.build_canvas(window, cx);

        let id = self.current().id.clone();
        info!(story = %id, "Story selected");
        update_settings_and_save(cx, "select_story", move |settings| {
            settings.set_last_story(Some(id));
        });
        cx.notify();
    }

    fn on_story_action(&mut self, action: &StoryAction, window: &mut Window, cx: &mut Context<Self>) {
        let forward = matches!(action, StoryAction::Next);
        let index = adjacent_index(self.selected, self.stories.len(), forward);
        self.select_story(index, window, cx);
    }

    fn on_value_change(&mut self, value: &str, window: &mut Window, cx: &mut Context<Self>) {
        if let StoryArgs::InputField(args) = &mut self.current_mut().args {
            args.value = value.to_string();
        }
        if let StoryCanvas::Fields(fields) = &self.canvas {
            for field in fields {
                field.update(cx, |field, cx| field.set_value(value, window, cx));
            }
        }
        cx.notify();
    }

    fn on_rows_selected(&mut self, rows: &[Value], cx: &mut Context<Self>) {
        let names: Vec<&str> = rows
            .iter()
            .filter_map(|row| row.get("name").and_then(Value::as_str))
            .collect();
        debug!(count = rows.len(), "Story rows selected");
        self.event_log = Some(format!("onRowSelect [{}]", names.join(", ")).into());
        cx.notify();
    }

    /// Change the current args and refresh the canvas
    fn update_args(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
        update: impl FnOnce(&mut StoryArgs),
    ) {
        update(&mut self.current_mut().args);
        self.apply_args(window, cx);
    }

    // ==================== Rendering ====================

    fn render_sidebar(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let mut sidebar = div()
            .id("story-sidebar")
            .flex()
            .flex_col()
            .w(px(STORY_SIDEBAR_WIDTH))
            .h_full()
            .p_4()
            .gap_1()
            .border_r_1()
            .border_color(palette.table_border)
            .bg(palette.table_bg)
            .overflow_y_scroll()
            .child(
                div()
                    .mb_4()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::BOLD)
                    .text_color(palette.text_primary)
                    .child(i18n_storybook(cx, "title")),
            );

        let mut group = "";
        for (index, story) in self.stories.iter().enumerate() {
            if story.title != group {
                group = story.title;
                sidebar = sidebar.child(
                    div()
                        .mt_3()
                        .mb_1()
                        .text_xs()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(palette.text_muted)
                        .child(SharedString::from(story.title.to_uppercase())),
                );
            }

            let active = index == self.selected;
            sidebar = sidebar.child(
                div()
                    .id(SharedString::from(story.id.clone()))
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .text_sm()
                    .cursor_pointer()
                    .text_color(if active { palette.accent } else { palette.text_secondary })
                    .when(active, |el| el.bg(palette.row_selected))
                    .hover(move |s| s.bg(palette.row_hover))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.select_story(index, window, cx)
                    }))
                    .child(story.name),
            );
        }

        sidebar.child(
            div()
                .mt_6()
                .text_xs()
                .text_color(palette.text_muted)
                .child(SharedString::from(format!(
                    "{} / {}  {}",
                    humanize_keystroke("alt-up"),
                    humanize_keystroke("alt-down"),
                    i18n_storybook(cx, "navigate_hint")
                ))),
        )
    }

    fn render_controls(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let args = self.current().args.clone();
        let dark_mode = args.dark_mode();
        let loading = args.is_loading();

        let mut controls = div()
            .flex()
            .flex_wrap()
            .items_center()
            .gap_2()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(palette.surface_border)
            .bg(palette.surface)
            .child(
                div()
                    .mr_2()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(i18n_storybook(cx, "controls")),
            )
            .child(
                Button::toggle("control-dark-mode", i18n_storybook(cx, "dark_mode"), dark_mode)
                    .palette(palette)
                    .on_click(|_, window, cx| {
                        window.dispatch_action(Box::new(ViewAction::ToggleDarkMode), cx)
                    }),
            )
            .child(
                Button::toggle("control-loading", i18n_storybook(cx, "loading"), loading)
                    .palette(palette)
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.update_args(window, cx, |args| args.set_loading(!loading))
                    })),
            );

        match args {
            StoryArgs::InputField(input) => {
                let props = input.props;
                controls = controls
                    .child(
                        Button::toggle("control-disabled", i18n_storybook(cx, "disabled"), props.disabled)
                            .palette(palette)
                            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                                this.update_args(window, cx, |args| {
                                    if let StoryArgs::InputField(a) = args {
                                        a.props.disabled = !props.disabled;
                                    }
                                })
                            })),
                    )
                    .child(
                        Button::toggle("control-invalid", i18n_storybook(cx, "invalid"), props.invalid)
                            .palette(palette)
                            .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                                this.update_args(window, cx, |args| {
                                    if let StoryArgs::InputField(a) = args {
                                        a.props.invalid = !props.invalid;
                                    }
                                })
                            })),
                    );

                for (name, variant) in [
                    ("outlined", InputVariant::Outlined),
                    ("filled", InputVariant::Filled),
                    ("ghost", InputVariant::Ghost),
                ] {
                    controls = controls.child(
                        Button::toggle(
                            SharedString::from(format!("control-variant-{name}")),
                            name,
                            props.variant == variant,
                        )
                        .palette(palette)
                        .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                            this.update_args(window, cx, |args| {
                                if let StoryArgs::InputField(a) = args {
                                    a.props.variant = variant;
                                }
                            })
                        })),
                    );
                }

                for (name, size) in [
                    ("sm", InputSize::Small),
                    ("md", InputSize::Medium),
                    ("lg", InputSize::Large),
                ] {
                    controls = controls.child(
                        Button::toggle(
                            SharedString::from(format!("control-size-{name}")),
                            name,
                            props.size == size,
                        )
                        .palette(palette)
                        .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                            this.update_args(window, cx, |args| {
                                if let StoryArgs::InputField(a) = args {
                                    a.props.size = size;
                                }
                            })
                        })),
                    );
                }
            }
            StoryArgs::DataTable(table) => {
                let selectable = table.selectable;
                controls = controls.child(
                    Button::toggle("control-selectable", i18n_storybook(cx, "selectable"), selectable)
                        .palette(palette)
                        .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                            this.update_args(window, cx, |args| {
                                if let StoryArgs::DataTable(a) = args {
                                    a.selectable = !selectable;
                                }
                            })
                        })),
                );
            }
        }

        controls
    }

    fn render_canvas(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let canvas = div()
            .flex()
            .flex_col()
            .gap_6()
            .p_6()
            .rounded_xl()
            .border_1()
            .border_color(palette.surface_border)
            .bg(palette.surface);

        match &self.canvas {
            StoryCanvas::Fields(fields) => canvas.child(
                div()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .max_w(px(420.0))
                    .children(fields.iter().cloned()),
            ),
            StoryCanvas::Table(table) => canvas.child(table.clone()).child(
                div()
                    .text_sm()
                    .text_color(palette.text_muted)
                    .child(
                        self.event_log
                            .clone()
                            .unwrap_or_else(|| i18n_storybook(cx, "no_events")),
                    ),
            ),
        }
    }
}

impl Render for Storybook {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Palette::for_mode(self.current().args.dark_mode());
        let story = self.current();
        let heading = SharedString::from(format!("{} / {}", story.title, story.name));
        let id = SharedString::from(story.id.clone());

        div()
            .id("storybook")
            .key_context("Storybook")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_story_action))
            .flex()
            .size_full()
            .bg(palette.background)
            .text_color(palette.text_primary)
            .child(self.render_sidebar(palette, cx))
            .child(
                div()
                    .id("story-main")
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .p_6()
                    .overflow_y_scroll()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_2XL))
                                    .font_weight(FontWeight::BOLD)
                                    .child(heading),
                            )
                            .child(div().text_xs().text_color(palette.text_muted).child(id)),
                    )
                    .child(self.render_controls(palette, cx))
                    .child(self.render_canvas(palette, cx)),
            )
    }
}

/// Window title of the storybook
pub fn storybook_title(cx: &App) -> SharedString {
    i18n_storybook(cx, "title")
}
