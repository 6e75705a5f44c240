//! UI Widgets - Demo Entry Point
//!
//! Opens the widget gallery.

use ui_widgets::app::application::run_app;
use ui_widgets::helpers::init_tracing;

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting widget demo...");

    run_app();
}
