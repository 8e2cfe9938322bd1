//! Input validation utilities

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Longest accepted username, in characters
pub const MAX_USERNAME_LEN: usize = 150;
/// Longest accepted password, in characters
pub const MAX_PASSWORD_LEN: usize = 128;
/// Longest accepted note title, in characters
pub const MAX_TITLE_LEN: usize = 150;

/// Per-field validation messages, keyed by form field name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`; the first message recorded wins
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record the error of a field validator, if any
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(())
}

fn max_chars(value: &str, label: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters long", label, max));
    }
    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    require(username, "Username")?;
    max_chars(username, "Username", MAX_USERNAME_LEN)?;

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.@+-]+$").expect("Failed to compile username regex")
    });

    if !regex.is_match(username) {
        return Err(
            "Username can only contain letters, numbers, and the characters _ . @ + -".to_string(),
        );
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    validate_present(password, "Password")?;
    max_chars(password, "Password", MAX_PASSWORD_LEN)
}

/// Validate note title
pub fn validate_title(title: &str) -> Result<(), String> {
    require(title, "Title")?;
    max_chars(title, "Title", MAX_TITLE_LEN)
}

/// Validate note content
pub fn validate_content(content: &str) -> Result<(), String> {
    require(content, "Content")
}

/// Check that a login field was filled in, without revealing any other rule
///
/// Whitespace counts as input so every registrable password can be submitted.
pub fn validate_present(value: &str, label: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(())
}
