//! UI Widgets Library
//!
//! A labeled input field and a sortable, selectable data table built on GPUI,
//! with the demo gallery and the story catalog that document them.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod stories;
pub mod theme;
