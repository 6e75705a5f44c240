//! Application Layer
//!
//! App initialization, window management and the demo workspace.

pub mod application;
pub mod fields;
pub mod users;
pub mod workspace;
