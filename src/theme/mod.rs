//! Theme - Colors and Typography

pub mod colors;
pub mod typography;

pub use colors::{Palette, WidgetColors};
pub use typography::Typography;
