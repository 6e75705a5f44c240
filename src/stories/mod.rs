//! Stories - Documented widget states
//!
//! A catalog of named stories with serializable args, and the storybook view
//! that renders them with live controls.

mod args;
mod catalog;
mod storybook;

pub use args::*;
pub use catalog::*;
pub use storybook::*;
