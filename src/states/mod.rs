//! State Management Layer
//!
//! Persisted settings, translations and demo form state.

mod form;
mod i18n;
mod settings;

pub use form::*;
pub use i18n::*;
pub use settings::*;
