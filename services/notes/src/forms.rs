//! Typed form payloads
//!
//! Every field defaults to an empty string so a missing field turns into a
//! validation message on the re-rendered form instead of a rejected request.

use serde::Deserialize;

use crate::{
    models::{Credentials, NoteFields},
    validation::{
        FieldErrors, validate_content, validate_password, validate_present, validate_title,
        validate_username,
    },
};

/// Submitted login form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Only presence is checked; anything else would hint at which accounts exist.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("username", validate_present(&self.username, "Username"));
        errors.check("password", validate_present(&self.password, "Password"));

        errors.into_result(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Submitted registration form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("username", validate_username(&self.username));
        errors.check("password", validate_password(&self.password));

        errors.into_result(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Submitted create/edit note form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteForm {
    pub fn validate(&self) -> Result<NoteFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("title", validate_title(&self.title));
        errors.check("content", validate_content(&self.content));

        errors.into_result(NoteFields {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}

impl From<NoteFields> for NoteForm {
    fn from(fields: NoteFields) -> Self {
        Self {
            title: fields.title,
            content: fields.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_only_requires_presence() {
        let form = LoginForm {
            username: "no such user!".to_string(),
            password: "x".to_string(),
        };
        assert!(form.validate().is_ok());

        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_accepts_every_registrable_password() {
        for password in ["pw1", " ", "   ", "\t"] {
            let registration = RegistrationForm {
                username: "carol".to_string(),
                password: password.to_string(),
            };
            assert!(registration.validate().is_ok(), "{password:?}");

            let login = LoginForm {
                username: "carol".to_string(),
                password: password.to_string(),
            };
            assert_eq!(login.validate().unwrap().password, password);
        }
    }

    #[test]
    fn test_registration_form_applies_username_rules() {
        let form = RegistrationForm {
            username: "alice smith".to_string(),
            password: "pw1".to_string(),
        };

        let errors = form.validate().unwrap_err();
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_none());

        let form = RegistrationForm {
            username: "alice".to_string(),
            password: "pw1".to_string(),
        };
        let credentials = form.validate().unwrap();
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "pw1");
    }

    #[test]
    fn test_note_form_keeps_values_verbatim() {
        let form = NoteForm {
            title: "Groceries".to_string(),
            content: "milk, eggs\n".to_string(),
        };

        let fields = form.validate().unwrap();
        assert_eq!(fields.title, "Groceries");
        assert_eq!(fields.content, "milk, eggs\n");
    }

    #[test]
    fn test_note_form_reports_both_fields() {
        let errors = NoteForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
