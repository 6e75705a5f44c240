//! Primitive Components
//!
//! Basic building blocks like buttons, checkboxes and the input field.

pub mod button;
pub mod checkbox;
pub mod input_field;
