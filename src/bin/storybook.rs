//! UI Widgets - Storybook Entry Point
//!
//! Browse the documented widget stories, or print the catalog as JSON.

use clap::Parser;
use ui_widgets::app::application::run_storybook;
use ui_widgets::stories::{find_story, manifest_json};
use ui_widgets::helpers::init_tracing;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Story to open, e.g. `inputfield--playground`
    story: Option<String>,

    /// Print the story catalog as JSON and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() {
    let args = Args::parse();

    if args.list {
        match manifest_json() {
            Ok(manifest) => println!("{manifest}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let _guard = init_tracing();

    if let Some(Err(e)) = args.story.as_deref().map(find_story) {
        tracing::error!(error = %e, "Cannot open story");
        eprintln!("{e}");
        std::process::exit(2);
    }

    tracing::info!(story = ?args.story, "Starting storybook...");
    run_storybook(args.story);
}
