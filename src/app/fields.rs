//! Demo Fields
//!
//! Every input field shown by the demo, with the props it is built from.

use crate::components::primitives::input_field::{InputFieldProps, InputSize, InputType, InputVariant};
use crate::states::{FormErrors, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoField {
    Name,
    Email,
    Password,
    Outlined,
    Filled,
    Ghost,
    Small,
    Medium,
    Large,
    Search,
    Disabled,
    Loading,
    Error,
    FullName,
    EmailAddress,
    FormPassword,
    ConfirmPassword,
}

use DemoField::*;

impl DemoField {
    pub const BASIC: [DemoField; 3] = [Name, Email, Password];
    pub const VARIANTS: [DemoField; 3] = [Outlined, Filled, Ghost];
    pub const SIZES: [DemoField; 3] = [Small, Medium, Large];
    pub const FORM: [DemoField; 4] = [FullName, EmailAddress, FormPassword, ConfirmPassword];

    pub const ALL: [DemoField; 17] = [
        Name,
        Email,
        Password,
        Outlined,
        Filled,
        Ghost,
        Small,
        Medium,
        Large,
        Search,
        Disabled,
        Loading,
        Error,
        FullName,
        EmailAddress,
        FormPassword,
        ConfirmPassword,
    ];

    /// Stable name, also the translation key prefix
    pub fn key(self) -> &'static str {
        match self {
            Name => "name",
            Email => "email",
            Password => "password",
            Outlined => "outlined",
            Filled => "filled",
            Ghost => "ghost",
            Small => "small",
            Medium => "medium",
            Large => "large",
            Search => "search",
            Disabled => "disabled",
            Loading => "loading",
            Error => "error",
            FullName => "full_name",
            EmailAddress => "email_address",
            FormPassword => "form_password",
            ConfirmPassword => "confirm",
        }
    }

    /// Form value the field edits; unbound fields keep their own text
    pub fn binding(self) -> Option<FormField> {
        match self {
            Name | FullName => Some(FormField::Name),
            Email | EmailAddress => Some(FormField::Email),
            Password | FormPassword => Some(FormField::Password),
            ConfirmPassword => Some(FormField::ConfirmPassword),
            Search => Some(FormField::Search),
            _ => None,
        }
    }

    /// Whether the field shows validation errors of its binding
    pub fn validated(self) -> bool {
        matches!(self, Email | FullName | EmailAddress | FormPassword | ConfirmPassword)
    }

    fn placeholder_key(self) -> String {
        match self {
            FormPassword => "password_placeholder".to_string(),
            other => format!("{}_placeholder", other.key()),
        }
    }

    fn helper_key(self) -> Option<&'static str> {
        match self {
            Name => Some("name_helper"),
            Password => Some("password_helper"),
            _ => None,
        }
    }

    /// Props for the current form state; `tr` translates `form.*` keys
    pub fn props(
        self,
        errors: &FormErrors,
        loading: bool,
        dark_mode: bool,
        tr: impl Fn(&str) -> String,
    ) -> InputFieldProps {
        let mut props = InputFieldProps::labeled(tr(&format!("{}_label", self.key())))
            .placeholder(tr(&self.placeholder_key()))
            .dark_mode(dark_mode);
        if let Some(helper) = self.helper_key() {
            props = props.helper_text(tr(helper));
        }

        props = match self {
            Email => props.input_type(InputType::Email),
            EmailAddress => props.input_type(InputType::Email).clearable(),
            Password | FormPassword | ConfirmPassword => {
                props.input_type(InputType::Password).password_toggle()
            }
            Outlined => props.variant(InputVariant::Outlined),
            Filled => props.variant(InputVariant::Filled),
            Ghost => props.variant(InputVariant::Ghost),
            Small => props.size(InputSize::Small),
            Medium => props.size(InputSize::Medium),
            Large => props.size(InputSize::Large),
            Search | FullName => props.clearable(),
            Disabled => props.disabled(true),
            Loading => props.loading(loading),
            Error => props.invalid(true).error_message(tr("required")),
            Name => props,
        };

        let error = self
            .binding()
            .filter(|_| self.validated())
            .and_then(|field| errors.field(field));
        match error {
            Some(error) => props.invalid(true).error_message(tr(error.i18n_key())),
            None => props,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::FormData;

    fn keys(key: &str) -> String {
        key.to_string()
    }

    fn errors_for(edit: impl FnOnce(&mut FormData)) -> FormErrors {
        let mut form = FormData::default();
        edit(&mut form);
        form.validate()
    }

    #[test]
    fn fields_share_form_values() {
        assert_eq!(Name.binding(), FullName.binding());
        assert_eq!(Email.binding(), EmailAddress.binding());
        assert_eq!(Password.binding(), FormPassword.binding());
        assert_eq!(Outlined.binding(), None);
    }

    #[test]
    fn labels_and_placeholders_come_from_keys() {
        let props = FormPassword.props(&FormErrors::default(), false, false, keys);
        assert_eq!(props.label.as_deref(), Some("form_password_label"));
        assert_eq!(props.placeholder.as_deref(), Some("password_placeholder"));
        assert_eq!(props.input_type, InputType::Password);
        assert!(props.show_password_toggle);

        let props = Name.props(&FormErrors::default(), false, false, keys);
        assert_eq!(props.helper_text.as_deref(), Some("name_helper"));
    }

    #[test]
    fn validation_errors_only_on_validated_fields() {
        let errors = errors_for(|form| form.name = "J".to_string());
        let basic = Name.props(&errors, false, false, keys);
        let full = FullName.props(&errors, false, false, keys);
        assert!(!basic.invalid && basic.error_message.is_none());
        assert!(full.invalid);
        assert_eq!(full.error_message.as_deref(), Some("name_too_short"));
    }

    #[test]
    fn basic_email_flags_missing_at_sign() {
        let errors = errors_for(|form| form.email = "john".to_string());
        let props = Email.props(&errors, false, false, keys);
        assert!(props.invalid);
        assert_eq!(props.error_message.as_deref(), Some("invalid_email"));
    }

    #[test]
    fn loading_and_dark_mode_flags() {
        let errors = FormErrors::default();
        assert!(Loading.props(&errors, true, false, keys).loading);
        assert!(!Loading.props(&errors, false, false, keys).loading);
        assert!(!Search.props(&errors, true, false, keys).loading);
        assert!(Ghost.props(&errors, false, true, keys).dark_mode);
    }

    #[test]
    fn error_field_is_always_invalid() {
        let props = Error.props(&FormErrors::default(), false, false, keys);
        assert!(props.invalid);
        assert_eq!(props.error_message.as_deref(), Some("required"));
    }
}
