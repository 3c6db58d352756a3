use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Local storage key holding the unsent draft.
pub const DRAFT_KEY: &str = "contact_form_draft";

pub const MAX_MESSAGE_LEN: usize = 500;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Message,
}

pub type FieldErrors = BTreeMap<FormField, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Returns a message for every field that fails its rule.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(FormField::Email, "Email is required".to_string());
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.insert(
                FormField::Email,
                "Please enter a valid email address".to_string(),
            );
        }
        if self.message.trim().is_empty() {
            errors.insert(FormField::Message, "Message is required".to_string());
        } else if self.message.chars().count() > MAX_MESSAGE_LEN {
            errors.insert(
                FormField::Message,
                format!("Message must be at most {MAX_MESSAGE_LEN} characters"),
            );
        }
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn remaining_chars(&self) -> isize {
        MAX_MESSAGE_LEN as isize - self.message.chars().count() as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_name_missing() {
        let errors = ContactForm::new("", "a@b.com", "hi").validate();
        assert_eq!(errors.len(), 1);
        let message = errors.get(&FormField::Name).expect("name should fail");
        assert!(!message.is_empty());
    }

    #[test]
    fn test_valid_form() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello there");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_whitespace_only_fields() {
        let errors = ContactForm::new("   ", " ", "\n\t").validate();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![FormField::Name, FormField::Email, FormField::Message]
        );
        assert_eq!(errors[&FormField::Email], "Email is required");
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plain", "a@b", "@b.com", "a@.com", "a b@c.com", "a@b.com extra"] {
            let errors = ContactForm::new("Ada", bad, "hi").validate();
            assert_eq!(
                errors.get(&FormField::Email).map(String::as_str),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
        for good in ["a@b.com", "first.last@sub.example.org", "  padded@x.io  "] {
            assert!(ContactForm::new("Ada", good, "hi").validate().is_empty(), "{good}");
        }
    }

    #[test]
    fn test_message_length_limit() {
        let at_limit = "x".repeat(MAX_MESSAGE_LEN);
        assert!(ContactForm::new("Ada", "a@b.com", at_limit).validate().is_empty());

        let over = "x".repeat(MAX_MESSAGE_LEN + 1);
        let errors = ContactForm::new("Ada", "a@b.com", over).validate();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![FormField::Message]
        );
    }

    #[test]
    fn test_message_length_counts_chars() {
        let form = ContactForm::new("Ada", "a@b.com", "é".repeat(MAX_MESSAGE_LEN));
        assert!(form.validate().is_empty());
        assert_eq!(form.remaining_chars(), 0);
    }

    #[test]
    fn test_set_field() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());
        form.set_field(FormField::Email, "a@b.com".to_string());
        assert_eq!(form.field(FormField::Email), "a@b.com");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_draft_json_shape() {
        let draft = ContactForm::new("Ada", "", "half written");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Ada", "email": "", "message": "half written"})
        );
        let restored: ContactForm = serde_json::from_value(value).unwrap();
        assert_eq!(restored, draft);
    }
}
