//! Helper Utilities
//!
//! Directories, key bindings and logging setup.

mod action;
mod fs;
mod telemetry;

pub use action::*;
pub use fs::*;
pub use telemetry::*;
