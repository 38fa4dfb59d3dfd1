//! The contact payload shared by the browser form and the relay.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContactError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `{ name, email, subject, message }`. Missing JSON fields parse as empty
/// strings so validation can report them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Names of blank (empty or whitespace-only) fields, in form order.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k.to_string())
        .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = self.missing_fields();
        if !fields.is_empty() {
            return Err(ContactError::MissingFields { fields });
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Loose shape check: something, `@`, something, `.`, something, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        let s = ContactSubmission::new(" ", "a@b.co", "", "hi");
        assert_eq!(s.missing_fields(), vec!["name", "subject"]);
        assert_eq!(
            s.validate(),
            Err(ContactError::MissingFields {
                fields: vec!["name".into(), "subject".into()]
            })
        );
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let s = ContactSubmission::new("", "nope", "s", "m");
        assert!(matches!(
            s.validate(),
            Err(ContactError::MissingFields { .. })
        ));
    }

    #[test]
    fn partial_json_parses_then_fails_validation() {
        let s: ContactSubmission = serde_json::from_str(r#"{ "name": "A" }"#).unwrap();
        assert_eq!(s.missing_fields().len(), 3);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = ContactSubmission::new("a", "a@b.co", "s", "m");
        s.clear();
        assert_eq!(s, ContactSubmission::default());
    }
}
