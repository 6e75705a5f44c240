//! InputField state
//!
//! Framework-free state behind the [`InputField`](super::InputField) view:
//! who owns the value, which decorations are live and what message is shown.

use serde::{Deserialize, Serialize};

/// Visual variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Tinted background
    Filled,
    /// Bordered (default)
    #[default]
    Outlined,
    /// No chrome until hovered or focused
    Ghost,
}

/// Field size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

/// Kind of value the field holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl InputType {
    /// Whether `text` may stand in a field of this type.
    ///
    /// Number fields accept partial numbers (`-`, `1.`, `2e`) so typing is
    /// never blocked halfway through a valid value.
    pub fn accepts(self, text: &str) -> bool {
        match self {
            InputType::Number => is_partial_number(text),
            InputType::Text | InputType::Password | InputType::Email => true,
        }
    }
}

fn is_partial_number(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };

    let mantissa_ok = mantissa.chars().all(|c| c.is_ascii_digit() || c == '.')
        && mantissa.matches('.').count() <= 1;

    match exponent {
        None => mantissa_ok,
        Some(exp) => {
            let digits = exp.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(exp);
            mantissa_ok
                && mantissa.chars().any(|c| c.is_ascii_digit())
                && digits.chars().all(|c| c.is_ascii_digit())
        }
    }
}

/// Configuration surface of an input field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputFieldProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: InputVariant,
    pub size: InputSize,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub show_clear_button: bool,
    pub show_password_toggle: bool,
    pub loading: bool,
    pub dark_mode: bool,
}

impl InputFieldProps {
    /// Props with a label and everything else at its default
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the helper text
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the error message
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set the input type
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set the variant
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Show the clear button
    pub fn clearable(mut self) -> Self {
        self.show_clear_button = true;
        self
    }

    /// Show the password visibility toggle
    pub fn password_toggle(mut self) -> Self {
        self.show_password_toggle = true;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set invalid state
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set dark mode
    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }
}

/// Who owns the displayed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMode {
    /// Owned by the caller and pushed in with `set_value`
    Controlled(String),
    /// Owned by the field
    Uncontrolled(String),
}

/// The value changed; carries the new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub value: String,
}

/// Trailing decorations that are currently live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decorations {
    pub spinner: bool,
    pub clear_button: bool,
    pub password_toggle: bool,
}

impl Decorations {
    pub fn any(&self) -> bool {
        self.spinner || self.clear_button || self.password_toggle
    }
}

/// Which text sits below the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Helper,
    Error,
}

/// Validation display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation<'a> {
    pub has_error: bool,
    pub message: Option<&'a str>,
    pub kind: MessageKind,
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

/// State of a single input field
#[derive(Debug, Clone)]
pub struct InputFieldModel {
    mode: ValueMode,
    props: InputFieldProps,
    password_visible: bool,
}

impl InputFieldModel {
    /// A field whose value is owned by the caller
    pub fn controlled(value: impl Into<String>, props: InputFieldProps) -> Self {
        Self {
            mode: ValueMode::Controlled(value.into()),
            props,
            password_visible: false,
        }
    }

    /// A field that keeps its own value
    pub fn uncontrolled(initial: impl Into<String>, props: InputFieldProps) -> Self {
        Self {
            mode: ValueMode::Uncontrolled(initial.into()),
            props,
            password_visible: false,
        }
    }

    // ==================== Getters ====================

    pub fn props(&self) -> &InputFieldProps {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut InputFieldProps {
        &mut self.props
    }

    pub fn mode(&self) -> &ValueMode {
        &self.mode
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, ValueMode::Controlled(_))
    }

    /// The value the field shows
    pub fn displayed_value(&self) -> &str {
        match &self.mode {
            ValueMode::Controlled(value) | ValueMode::Uncontrolled(value) => value,
        }
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Password fields render as plain text while revealed
    pub fn effective_input_type(&self) -> InputType {
        match self.props.input_type {
            InputType::Password if self.password_visible => InputType::Text,
            other => other,
        }
    }

    pub fn is_masked(&self) -> bool {
        self.effective_input_type() == InputType::Password
    }

    pub fn decorations(&self) -> Decorations {
        let props = &self.props;
        Decorations {
            spinner: props.loading,
            clear_button: props.show_clear_button
                && !self.displayed_value().is_empty()
                && !props.disabled
                && !props.loading,
            password_toggle: props.show_password_toggle
                && props.input_type == InputType::Password
                && !props.loading,
        }
    }

    pub fn validation(&self) -> Validation<'_> {
        let error = non_empty(&self.props.error_message);
        let has_error = self.props.invalid || error.is_some();
        Validation {
            has_error,
            message: error.or_else(|| non_empty(&self.props.helper_text)),
            kind: if has_error {
                MessageKind::Error
            } else {
                MessageKind::Helper
            },
        }
    }

    /// Whether the field keeps room on the right for its buttons
    pub fn reserves_trailing_space(&self) -> bool {
        (self.props.show_clear_button && !self.displayed_value().is_empty())
            || (self.props.show_password_toggle && self.props.input_type == InputType::Password)
    }

    // ==================== Mutations ====================

    /// Replace the value from outside.
    ///
    /// Controlled fields take the caller's value; uncontrolled fields reset
    /// their buffer.
    pub fn set_value(&mut self, value: impl Into<String>) {
        match &mut self.mode {
            ValueMode::Controlled(current) | ValueMode::Uncontrolled(current) => {
                *current = value.into();
            }
        }
    }

    /// The user edited the text.
    ///
    /// Returns the change to report, or `None` when the edit is ignored:
    /// nothing changed, the field is disabled, or the text is not valid for
    /// the input type.
    pub fn edit(&mut self, text: &str) -> Option<ValueChange> {
        if self.props.disabled || text == self.displayed_value() {
            return None;
        }
        if !self.props.input_type.accepts(text) {
            return None;
        }
        if let ValueMode::Uncontrolled(buffer) = &mut self.mode {
            *buffer = text.to_string();
        }
        Some(ValueChange {
            value: text.to_string(),
        })
    }

    /// Clear button pressed
    pub fn clear(&mut self) -> Option<ValueChange> {
        if !self.decorations().clear_button {
            return None;
        }
        if let ValueMode::Uncontrolled(buffer) = &mut self.mode {
            buffer.clear();
        }
        Some(ValueChange {
            value: String::new(),
        })
    }

    /// Password visibility toggle pressed. Returns whether anything changed.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if !self.decorations().password_toggle {
            return false;
        }
        self.password_visible = !self.password_visible;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clearable_with(value: &str) -> InputFieldModel {
        InputFieldModel::controlled(value, InputFieldProps::labeled("Search").clearable())
    }

    #[test]
    fn controlled_displays_caller_value() {
        let mut model = clearable_with("abc");
        let change = model.edit("abcd");
        assert_eq!(change, Some(ValueChange { value: "abcd".into() }));
        // The caller has not pushed the new value yet
        assert_eq!(model.displayed_value(), "abc");

        model.set_value("abcd");
        assert_eq!(model.displayed_value(), "abcd");
    }

    #[test]
    fn uncontrolled_tracks_its_own_buffer() {
        let mut model = InputFieldModel::uncontrolled("", InputFieldProps::default());
        assert!(!model.is_controlled());
        model.edit("hello");
        assert_eq!(model.displayed_value(), "hello");
    }

    #[test]
    fn clear_reports_empty_value_once() {
        let mut model = InputFieldModel::uncontrolled("text", InputFieldProps::default().clearable());
        let changes: Vec<_> = [model.clear(), model.clear()].into_iter().flatten().collect();
        assert_eq!(changes, vec![ValueChange { value: String::new() }]);
        assert_eq!(model.displayed_value(), "");
    }

    #[test]
    fn clear_is_ignored_without_button() {
        let mut model = InputFieldModel::uncontrolled("text", InputFieldProps::default());
        assert_eq!(model.clear(), None);
        assert_eq!(model.displayed_value(), "text");

        let mut disabled = clearable_with("text");
        disabled.props_mut().disabled = true;
        assert_eq!(disabled.clear(), None);
    }

    #[test]
    fn clear_button_needs_a_value() {
        assert!(!clearable_with("").decorations().clear_button);
        assert!(clearable_with("x").decorations().clear_button);
    }

    #[test]
    fn loading_hides_clear_and_password_toggle() {
        let props = InputFieldProps::default()
            .clearable()
            .password_toggle()
            .input_type(InputType::Password)
            .loading(true);
        let mut model = InputFieldModel::controlled("secret", props);

        let decorations = model.decorations();
        assert!(decorations.spinner);
        assert!(!decorations.clear_button);
        assert!(!decorations.password_toggle);
        assert_eq!(model.clear(), None);
        assert!(!model.toggle_password_visibility());
    }

    #[test]
    fn password_toggle_only_for_password_type() {
        let model = InputFieldModel::controlled("", InputFieldProps::default().password_toggle());
        assert!(!model.decorations().password_toggle);
        assert!(!model.reserves_trailing_space());
    }

    #[test]
    fn toggling_reveals_password() {
        let props = InputFieldProps::default()
            .input_type(InputType::Password)
            .password_toggle();
        let mut model = InputFieldModel::controlled("secret", props);
        assert!(model.is_masked());

        assert!(model.toggle_password_visibility());
        assert_eq!(model.effective_input_type(), InputType::Text);
        assert!(!model.is_masked());

        assert!(model.toggle_password_visibility());
        assert_eq!(model.effective_input_type(), InputType::Password);
    }

    #[test]
    fn error_message_wins_over_helper_text() {
        let props = InputFieldProps::default()
            .helper_text("Helper")
            .error_message("Required");
        let model = InputFieldModel::controlled("", props);
        let validation = model.validation();
        assert!(validation.has_error);
        assert_eq!(validation.message, Some("Required"));
        assert_eq!(validation.kind, MessageKind::Error);
    }

    #[test]
    fn invalid_flag_alone_triggers_error_state() {
        let props = InputFieldProps::default().helper_text("Helper").invalid(true);
        let model = InputFieldModel::controlled("", props);
        let validation = model.validation();
        assert!(validation.has_error);
        assert_eq!(validation.message, Some("Helper"));
        assert_eq!(validation.kind, MessageKind::Error);
    }

    #[test]
    fn empty_error_message_is_not_an_error() {
        let props = InputFieldProps::default().error_message("");
        let validation = InputFieldModel::controlled("", props).validation();
        assert!(!validation.has_error);
        assert_eq!(validation.message, None);
        assert_eq!(validation.kind, MessageKind::Helper);
    }

    #[test]
    fn synced_echo_is_ignored_but_later_edits_are_not() {
        let mut model = InputFieldModel::controlled("", InputFieldProps::default());
        model.set_value("ab");
        // The editor reports the text we just pushed into it
        assert_eq!(model.edit("ab"), None);

        assert!(model.edit("abc").is_some());
        model.set_value("abc");
        assert_eq!(model.edit("ab"), Some(ValueChange { value: "ab".into() }));
        model.set_value("ab");

        model.set_value("");
        assert_eq!(model.edit(""), None);
        assert!(model.edit("x").is_some());
        model.set_value("x");
        assert_eq!(model.edit(""), Some(ValueChange { value: String::new() }));
    }

    #[test]
    fn trailing_space_kept_while_buttons_hidden() {
        let mut model = clearable_with("text");
        model.props_mut().disabled = true;
        assert!(!model.decorations().any());
        assert!(model.reserves_trailing_space());
        assert!(!clearable_with("").reserves_trailing_space());
    }

    #[test]
    fn disabled_field_ignores_edits() {
        let mut model = InputFieldModel::uncontrolled("a", InputFieldProps::default().disabled(true));
        assert_eq!(model.edit("ab"), None);
        assert_eq!(model.displayed_value(), "a");
    }

    #[test]
    fn number_field_rejects_non_numeric_text() {
        let mut model =
            InputFieldModel::uncontrolled("", InputFieldProps::default().input_type(InputType::Number));
        assert!(model.edit("-1.5").is_some());
        assert_eq!(model.edit("-1.5x"), None);
        assert_eq!(model.displayed_value(), "-1.5");
        assert!(model.edit("2e-3").is_some());
    }

    #[test]
    fn partial_numbers() {
        for ok in ["", "-", "1.", ".5", "12", "1e", "1e+", "3E10"] {
            assert!(InputType::Number.accepts(ok), "{ok}");
        }
        for bad in ["abc", "1..2", "e5", "1e5e", "--1", "1,5"] {
            assert!(!InputType::Number.accepts(bad), "{bad}");
        }
        assert!(InputType::Email.accepts("anything"));
    }

    #[test]
    fn props_deserialize_from_story_args() {
        let props: InputFieldProps = serde_json::from_str(
            r#"{"label":"Label","variant":"ghost","size":"lg","type":"password","showClearButton":true}"#,
        )
        .expect("props parse");
        assert_eq!(props.variant, InputVariant::Ghost);
        assert_eq!(props.size, InputSize::Large);
        assert_eq!(props.input_type, InputType::Password);
        assert!(props.show_clear_button);
        assert!(!props.loading);
    }
}
