//! Story Catalog
//!
//! Every documented state of the widgets, addressable by a stable id.

use serde::Serialize;

use super::args::{sample_people, DataTableArgs, InputFieldArgs, StoryArgs};
use crate::components::primitives::input_field::{InputFieldProps, InputType, InputVariant};
use crate::error::{Error, Result};

/// How a story arranges its widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLayout {
    /// One widget driven directly by the args
    Single,
    /// One field per visual variant
    Variants,
    /// Normal, invalid, disabled and loading fields side by side
    States,
}

impl StoryLayout {
    /// Props for each field the layout renders, derived from the story props
    pub fn field_props(self, base: &InputFieldProps) -> Vec<InputFieldProps> {
        match self {
            StoryLayout::Single => vec![base.clone()],
            StoryLayout::Variants => [
                ("Outlined", InputVariant::Outlined),
                ("Filled", InputVariant::Filled),
                ("Ghost", InputVariant::Ghost),
            ]
            .into_iter()
            .map(|(name, variant)| InputFieldProps {
                label: Some(name.to_string()),
                placeholder: Some(format!("{name} variant")),
                variant,
                ..base.clone()
            })
            .collect(),
            StoryLayout::States => {
                let plain = InputFieldProps {
                    helper_text: None,
                    ..base.clone()
                };
                vec![
                    InputFieldProps {
                        label: Some("Normal".to_string()),
                        ..plain.clone()
                    },
                    InputFieldProps {
                        label: Some("Invalid".to_string()),
                        invalid: true,
                        error_message: Some("This field is required".to_string()),
                        ..plain.clone()
                    },
                    InputFieldProps {
                        label: Some("Disabled".to_string()),
                        disabled: true,
                        ..plain.clone()
                    },
                    InputFieldProps {
                        label: Some("Loading".to_string()),
                        loading: true,
                        ..plain
                    },
                ]
            }
        }
    }
}

/// A documented widget state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub id: String,
    /// Component the story documents
    pub title: &'static str,
    pub name: &'static str,
    pub layout: StoryLayout,
    #[serde(flatten)]
    pub args: StoryArgs,
}

impl Story {
    fn new(title: &'static str, name: &'static str, layout: StoryLayout, args: StoryArgs) -> Self {
        Self {
            id: story_id(title, name),
            title,
            name,
            layout,
            args,
        }
    }
}

/// Id of a story: `component--story-name`, lowercase
pub fn story_id(title: &str, name: &str) -> String {
    let slug = |s: &str| {
        s.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    };
    format!("{}--{}", slug(title), slug(name))
}

/// All stories, grouped by component
pub fn story_catalog() -> Vec<Story> {
    let input = InputFieldArgs::default();
    let password = InputFieldArgs {
        props: InputFieldProps {
            label: Some("Password".to_string()),
            placeholder: Some("Enter password".to_string()),
            input_type: InputType::Password,
            ..input.props.clone()
        },
        ..input.clone()
    };
    let table = DataTableArgs::default();

    vec![
        Story::new(
            "InputField",
            "Playground",
            StoryLayout::Single,
            StoryArgs::InputField(input.clone()),
        ),
        Story::new(
            "InputField",
            "Variants",
            StoryLayout::Variants,
            StoryArgs::InputField(input.clone()),
        ),
        Story::new(
            "InputField",
            "States",
            StoryLayout::States,
            StoryArgs::InputField(input),
        ),
        Story::new(
            "InputField",
            "Password",
            StoryLayout::Single,
            StoryArgs::InputField(password),
        ),
        Story::new(
            "DataTable",
            "Playground",
            StoryLayout::Single,
            StoryArgs::DataTable(DataTableArgs {
                data: sample_people(),
                ..table.clone()
            }),
        ),
        Story::new(
            "DataTable",
            "Loading",
            StoryLayout::Single,
            StoryArgs::DataTable(DataTableArgs {
                loading: true,
                ..table.clone()
            }),
        ),
        Story::new(
            "DataTable",
            "Empty",
            StoryLayout::Single,
            StoryArgs::DataTable(table),
        ),
    ]
}

/// Look up a story by id
pub fn find_story(id: &str) -> Result<Story> {
    story_catalog()
        .into_iter()
        .find(|story| story.id == id)
        .ok_or_else(|| Error::UnknownStory { id: id.to_string() })
}

/// Position of a story in the catalog
pub fn story_index(id: &str) -> Option<usize> {
    story_catalog().iter().position(|story| story.id == id)
}

/// The catalog as pretty JSON
pub fn manifest_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&story_catalog())?)
}

/// Index of the neighbouring story, wrapping around the ends
pub fn adjacent_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_lowercase_slugs() {
        assert_eq!(story_id("InputField", "Playground"), "inputfield--playground");
        assert_eq!(story_id("DataTable", "Row Keys"), "datatable--row-keys");
    }

    #[test]
    fn catalog_lists_every_story() {
        let ids: Vec<String> = story_catalog().into_iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [
                "inputfield--playground",
                "inputfield--variants",
                "inputfield--states",
                "inputfield--password",
                "datatable--playground",
                "datatable--loading",
                "datatable--empty",
            ]
        );
    }

    #[test]
    fn find_known_and_unknown_stories() {
        let story = find_story("inputfield--password").expect("known story");
        let StoryArgs::InputField(args) = story.args else {
            panic!("password story documents the input field");
        };
        assert_eq!(args.props.input_type, InputType::Password);
        assert_eq!(args.props.label.as_deref(), Some("Password"));

        let err = find_story("button--primary").expect_err("unknown story");
        assert!(matches!(err, Error::UnknownStory { ref id } if id == "button--primary"));
    }

    #[test]
    fn table_stories_differ_by_args() {
        let StoryArgs::DataTable(playground) = find_story("datatable--playground").expect("story").args
        else {
            panic!("table story");
        };
        let StoryArgs::DataTable(loading) = find_story("datatable--loading").expect("story").args else {
            panic!("table story");
        };
        let StoryArgs::DataTable(empty) = find_story("datatable--empty").expect("story").args else {
            panic!("table story");
        };
        assert_eq!(playground.data.len(), 4);
        assert!(loading.loading && loading.data.is_empty());
        assert!(!empty.loading && empty.data.is_empty());
        assert!(playground.selectable);
    }

    #[test]
    fn manifest_is_json_array_of_stories() {
        let manifest = manifest_json().expect("manifest");
        let value: serde_json::Value = serde_json::from_str(&manifest).expect("valid json");
        let stories = value.as_array().expect("array");
        assert_eq!(stories.len(), 7);
        assert_eq!(stories[0]["id"], "inputfield--playground");
        assert_eq!(stories[0]["component"], "InputField");
        assert_eq!(stories[0]["args"]["placeholder"], "Enter text...");
        assert_eq!(stories[2]["layout"], "states");
    }

    #[test]
    fn variants_layout_renders_each_variant() {
        let props = StoryLayout::Variants.field_props(&InputFieldArgs::default().props);
        let variants: Vec<InputVariant> = props.iter().map(|p| p.variant).collect();
        assert_eq!(
            variants,
            [InputVariant::Outlined, InputVariant::Filled, InputVariant::Ghost]
        );
        assert_eq!(props[1].placeholder.as_deref(), Some("Filled variant"));
    }

    #[test]
    fn states_layout_drops_helper_text() {
        let props = StoryLayout::States.field_props(&InputFieldArgs::default().props);
        assert_eq!(props.len(), 4);
        assert!(props.iter().all(|p| p.helper_text.is_none()));
        assert!(props[1].invalid);
        assert!(props[2].disabled);
        assert!(props[3].loading);
        assert!(!props[0].invalid && !props[0].disabled && !props[0].loading);
    }

    #[test]
    fn story_index_matches_catalog_order() {
        assert_eq!(story_index("inputfield--playground"), Some(0));
        assert_eq!(story_index("datatable--empty"), Some(6));
        assert_eq!(story_index("nope"), None);
    }

    #[test]
    fn adjacent_index_wraps() {
        assert_eq!(adjacent_index(0, 7, true), 1);
        assert_eq!(adjacent_index(6, 7, true), 0);
        assert_eq!(adjacent_index(0, 7, false), 6);
        assert_eq!(adjacent_index(0, 0, false), 0);
    }
}
