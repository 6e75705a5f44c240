//! Demo Form State
//!
//! Values of the demo's sign-up form and the rules that validate them.

/// Field values of the sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub search: String,
}

/// Form fields that can be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Search,
}

/// A failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
}

impl FieldError {
    /// Translation key under the `form` namespace
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::NameTooShort => "name_too_short",
            FieldError::InvalidEmail => "invalid_email",
            FieldError::PasswordTooShort => "password_too_short",
            FieldError::PasswordMismatch => "password_mismatch",
        }
    }
}

/// Validation result for every field; empty fields are never errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.field(FormField::Name).is_none()
            && self.field(FormField::Email).is_none()
            && self.field(FormField::Password).is_none()
            && self.field(FormField::ConfirmPassword).is_none()
    }

    pub fn field(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Password => self.password,
            FormField::ConfirmPassword => self.confirm_password,
            FormField::Search => None,
        }
    }
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
            FormField::Search => &self.search,
        }
    }

    /// Store a value. Returns whether it changed.
    pub fn set(&mut self, field: FormField, value: &str) -> bool {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
            FormField::Search => &mut self.search,
        };
        if *slot == value {
            return false;
        }
        *slot = value.to_string();
        true
    }

    pub fn validate(&self) -> FormErrors {
        let name_len = self.name.chars().count();
        let password_len = self.password.chars().count();

        FormErrors {
            name: (name_len > 0 && name_len < 2).then_some(FieldError::NameTooShort),
            email: (!self.email.is_empty() && !self.email.contains('@'))
                .then_some(FieldError::InvalidEmail),
            password: (password_len > 0 && password_len < 8)
                .then_some(FieldError::PasswordTooShort),
            confirm_password: (!self.confirm_password.is_empty()
                && self.password != self.confirm_password)
                .then_some(FieldError::PasswordMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> FormData {
        FormData {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            search: String::new(),
        }
    }

    #[test]
    fn empty_form_has_no_errors() {
        assert!(FormData::default().validate().is_empty());
    }

    #[test]
    fn valid_form() {
        let errors = form("Jo", "jo@example.com", "hunter22", "hunter22").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn each_rule_fires() {
        let errors = form("J", "jo.example.com", "short", "other").validate();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
        assert_eq!(errors.confirm_password, Some(FieldError::PasswordMismatch));
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(form("李雷", "", "", "").validate().is_empty());
    }

    #[test]
    fn mismatch_only_after_confirm_typed() {
        let errors = form("", "", "password1", "").validate();
        assert_eq!(errors.confirm_password, None);
    }

    #[test]
    fn set_reports_changes() {
        let mut data = FormData::default();
        assert!(data.set(FormField::Email, "a@b.c"));
        assert!(!data.set(FormField::Email, "a@b.c"));
        assert_eq!(data.get(FormField::Email), "a@b.c");
    }
}
