//! Browser-side contact form flow.
//!
//! One best-effort POST per submit: a 2xx response clears the form and shows
//! a success notice; a transport failure or any other status shows an error
//! notice and keeps what the visitor typed.

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, TransportError};
use crate::submission::ContactSubmission;

pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xnngbaeo";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Outbound HTTP collaborator. Returns the response status code.
pub trait Transport {
    fn post_json(&mut self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent { status: u16 },
    Rejected { status: u16 },
    Unreachable(TransportError),
    /// Required fields were blank; nothing was sent.
    Invalid(ContactError),
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    endpoint: String,
    fields: ContactSubmission,
    loading: bool,
    notification: Option<Notification>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ContactForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            fields: ContactSubmission::default(),
            loading: false,
            notification: None,
        }
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[inline]
    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Subject => &mut self.fields.subject,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn submit<T: Transport + ?Sized>(&mut self, transport: &mut T) -> SubmitOutcome {
        let missing = self.fields.missing_fields();
        if !missing.is_empty() {
            // Browsers block submission on empty required inputs; mirror that.
            return SubmitOutcome::Invalid(ContactError::MissingFields { fields: missing });
        }

        self.loading = true;
        let body = match serde_json::to_value(&self.fields) {
            Ok(body) => body,
            Err(e) => {
                self.loading = false;
                return SubmitOutcome::Invalid(e.into());
            }
        };
        let result = transport.post_json(&self.endpoint, &body);
        self.loading = false;

        match result {
            Ok(status) if (200..300).contains(&status) => {
                info!("contact form sent ({status})");
                self.fields.clear();
                self.notify(Severity::Success, SUCCESS_MESSAGE);
                SubmitOutcome::Sent { status }
            }
            Ok(status) => {
                error!("contact form rejected with status {status}");
                self.notify(Severity::Error, FAILURE_MESSAGE);
                SubmitOutcome::Rejected { status }
            }
            Err(e) => {
                error!("contact form submission error: {e}");
                self.notify(Severity::Error, FAILURE_MESSAGE);
                SubmitOutcome::Unreachable(e)
            }
        }
    }

    fn notify(&mut self, severity: Severity, message: &str) {
        self.notification = Some(Notification {
            severity,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<u16, TransportError>, usize);

    impl Transport for Fixed {
        fn post_json(&mut self, _: &str, _: &serde_json::Value) -> Result<u16, TransportError> {
            self.1 += 1;
            self.0.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut f = ContactForm::default();
        f.set(Field::Name, "Ada");
        f.set(Field::Email, "ada@example.com");
        f.set(Field::Subject, "Hi");
        f.set(Field::Message, "Hello");
        f
    }

    #[test]
    fn blank_form_sends_nothing() {
        let mut t = Fixed(Ok(200), 0);
        let mut f = ContactForm::default();
        assert!(matches!(f.submit(&mut t), SubmitOutcome::Invalid(_)));
        assert_eq!(t.1, 0);
        assert!(f.notification().is_none());
    }

    #[test]
    fn redirect_status_is_a_failure() {
        let mut t = Fixed(Ok(302), 0);
        let mut f = filled();
        assert_eq!(f.submit(&mut t), SubmitOutcome::Rejected { status: 302 });
        assert_eq!(f.fields().name, "Ada");
    }

    #[test]
    fn dismiss_clears_notice() {
        let mut t = Fixed(Ok(204), 0);
        let mut f = filled();
        f.submit(&mut t);
        assert!(f.notification().is_some());
        f.dismiss_notification();
        assert!(f.notification().is_none());
        assert!(!f.is_loading());
    }
}
