//! Story Arguments
//!
//! Serializable knobs for each story. Field names follow the camelCase used by
//! the component props so a manifest can be fed back into another tool.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::components::primitives::input_field::{InputFieldProps, InputSize, InputType, InputVariant};
use crate::constants::DEFAULT_EMPTY_MESSAGE;

/// Arguments of an InputField story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputFieldArgs {
    #[serde(flatten)]
    pub props: InputFieldProps,
    pub value: String,
}

impl Default for InputFieldArgs {
    fn default() -> Self {
        Self {
            props: InputFieldProps {
                label: Some("Label".to_string()),
                placeholder: Some("Enter text...".to_string()),
                helper_text: Some("Helper text".to_string()),
                error_message: None,
                disabled: false,
                invalid: false,
                variant: InputVariant::Outlined,
                size: InputSize::Medium,
                input_type: InputType::Text,
                show_clear_button: true,
                show_password_toggle: true,
                loading: false,
                dark_mode: false,
            },
            value: String::new(),
        }
    }
}

/// Arguments of a DataTable story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataTableArgs {
    pub data: Vec<Value>,
    pub loading: bool,
    pub selectable: bool,
    pub dark_mode: bool,
    pub empty_message: String,
}

impl Default for DataTableArgs {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            selectable: true,
            dark_mode: false,
            empty_message: "No users found".to_string(),
        }
    }
}

impl DataTableArgs {
    /// Message shown by the empty state, never blank
    pub fn empty_message(&self) -> &str {
        if self.empty_message.trim().is_empty() {
            DEFAULT_EMPTY_MESSAGE
        } else {
            &self.empty_message
        }
    }
}

/// Arguments of any story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", content = "args")]
pub enum StoryArgs {
    InputField(InputFieldArgs),
    DataTable(DataTableArgs),
}

impl StoryArgs {
    pub fn dark_mode(&self) -> bool {
        match self {
            StoryArgs::InputField(args) => args.props.dark_mode,
            StoryArgs::DataTable(args) => args.dark_mode,
        }
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        match self {
            StoryArgs::InputField(args) => args.props.dark_mode = dark_mode,
            StoryArgs::DataTable(args) => args.dark_mode = dark_mode,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            StoryArgs::InputField(args) => args.props.loading,
            StoryArgs::DataTable(args) => args.loading,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        match self {
            StoryArgs::InputField(args) => args.props.loading = loading,
            StoryArgs::DataTable(args) => args.loading = loading,
        }
    }
}

/// Sample people shown by the DataTable stories
pub fn sample_people() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "Alice", "email": "alice@example.com", "age": 28 }),
        json!({ "id": 2, "name": "Bob", "email": "bob@example.com", "age": 34 }),
        json!({ "id": 3, "name": "Charlie", "email": "charlie@example.com", "age": 23 }),
        json!({ "id": 4, "name": "Diana", "email": "diana@example.com", "age": 42 }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_args_serialize_flat() {
        let value = serde_json::to_value(InputFieldArgs::default()).expect("serialize");
        assert_eq!(value["label"], "Label");
        assert_eq!(value["variant"], "outlined");
        assert_eq!(value["size"], "md");
        assert_eq!(value["type"], "text");
        assert_eq!(value["showClearButton"], true);
        assert_eq!(value["value"], "");
    }

    #[test]
    fn input_args_fill_missing_fields_with_defaults() {
        let args: InputFieldArgs =
            serde_json::from_str(r#"{ "type": "password", "size": "lg" }"#).expect("parse");
        assert_eq!(args.props.input_type, InputType::Password);
        assert_eq!(args.props.size, InputSize::Large);
        assert_eq!(args.props.variant, InputVariant::Outlined);
    }

    #[test]
    fn blank_empty_message_uses_default() {
        let args = DataTableArgs {
            empty_message: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(args.empty_message(), DEFAULT_EMPTY_MESSAGE);
        assert_eq!(DataTableArgs::default().empty_message(), "No users found");
    }

    #[test]
    fn story_args_are_tagged_by_component() {
        let args = StoryArgs::DataTable(DataTableArgs::default());
        let value = serde_json::to_value(&args).expect("serialize");
        assert_eq!(value["component"], "DataTable");
        assert_eq!(value["args"]["selectable"], true);
    }
}
