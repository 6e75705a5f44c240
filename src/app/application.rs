//! Application - App Initialization and Window Management
//!
//! Shared startup for the demo and the storybook windows.

use gpui::{
    px, AnyView, App, AppContext, Application, Bounds, Entity, Render, SharedString,
    TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{new_key_bindings, MenuAction, ViewAction};
use crate::states::{i18n_demo, update_settings_and_save, WidgetStore};
use crate::stories::{story_index, storybook_title, Storybook};

/// Apply the light or dark component theme
fn apply_theme_mode(dark_mode: bool, cx: &mut App) {
    let mode = if dark_mode {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    Theme::change(mode, None, cx);
}

/// Components, key bindings, global actions and the settings store
fn init(cx: &mut App) {
    gpui_component::init(cx);
    cx.bind_keys(new_key_bindings());

    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &ViewAction, cx: &mut App| match action {
        ViewAction::ToggleDarkMode => {
            let dark_mode = !cx.global::<WidgetStore>().read(cx).dark_mode();
            apply_theme_mode(dark_mode, cx);
            update_settings_and_save(cx, "toggle_dark_mode", move |settings| {
                settings.set_dark_mode(dark_mode);
            });
        }
        ViewAction::ToggleLocale => {
            update_settings_and_save(cx, "toggle_locale", |settings| settings.cycle_locale());
        }
    });

    // Quit the app when all windows are closed
    cx.on_window_closed(|cx| {
        if cx.windows().is_empty() {
            cx.quit();
        }
    })
    .detach();

    let store = WidgetStore::init(cx);
    let dark_mode = store.read(cx).dark_mode();
    apply_theme_mode(dark_mode, cx);
}

fn open_main_window<V: Render + 'static>(
    title: SharedString,
    cx: &mut App,
    build: impl FnOnce(&mut Window, &mut App) -> Entity<V> + 'static,
) {
    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(title.clone()),
            appears_transparent: false,
            traffic_light_position: None,
        }),
        ..Default::default()
    };

    let opened = cx.open_window(window_options, |window, cx| {
        let view: AnyView = build(window, cx).into();
        cx.new(|cx| Root::new(view, window, cx))
    });

    match opened {
        Ok(_) => info!(title = %title, "Window opened"),
        Err(e) => error!(error = %e, "Failed to open window"),
    }
    cx.activate(true);
}

/// Run the demo application
pub fn run_app() {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|cx: &mut App| {
            init(cx);
            let title = i18n_demo(cx, "title");
            open_main_window(title, cx, |window, cx| {
                cx.new(|cx| Workspace::new(window, cx))
            });
        });
}

/// Run the storybook, starting at `initial` or the last story viewed
pub fn run_storybook(initial: Option<String>) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            init(cx);
            let last_story = cx
                .global::<WidgetStore>()
                .read(cx)
                .last_story()
                .map(str::to_string);
            let initial = initial
                .or(last_story)
                .and_then(|id| story_index(&id))
                .unwrap_or_default();
            let title = storybook_title(cx);
            open_main_window(title, cx, move |window, cx| {
                cx.new(|cx| Storybook::new(initial, window, cx))
            });
        });
}
