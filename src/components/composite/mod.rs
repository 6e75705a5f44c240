//! Composite Components
//!
//! Components built from primitives.

pub mod data_table;
