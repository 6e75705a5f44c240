//! UI Constants
//!
//! Centralized UI constants for consistent layout across the widgets and apps.

/// Number of placeholder rows shown while a table is loading
pub const SKELETON_ROW_COUNT: usize = 5;

/// Width of the selection checkbox column
pub const SELECTION_COLUMN_WIDTH: f32 = 48.0;

/// Default table message when there is nothing to show
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Title of the empty-state panel
pub const EMPTY_STATE_TITLE: &str = "No Data";

/// Field used for row identity when no accessor is configured
pub const DEFAULT_ROW_KEY_FIELD: &str = "id";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Storybook sidebar width
pub const STORY_SIDEBAR_WIDTH: f32 = 240.0;

/// Simulated loading durations used by the demo
pub const INPUT_LOADING_MS: u64 = 3000;
pub const TABLE_LOADING_MS: u64 = 2000;

/// Settings and log file names
pub const SETTINGS_FILE_NAME: &str = "ui-widgets.toml";
pub const LOG_FILE_PREFIX: &str = "ui-widgets.log";
