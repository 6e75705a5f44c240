//! InputField
//!
//! A labeled text field with variants, sizes, validation messages, a clear
//! button, password reveal and a loading spinner.

mod input_field;
mod model;
mod style;

pub use input_field::{ChangeHandler, InputField};
pub use model::{
    Decorations, InputFieldModel, InputFieldProps, InputSize, InputType, InputVariant,
    MessageKind, Validation, ValueChange, ValueMode,
};
pub use style::{SizeStyle, VariantStyle};
