//! HTML bodies for the two relay emails.
//!
//! Bodies are askama templates under `templates/email/`. Submitted text goes
//! through askama's HTML escaper, and message line breaks are rendered as
//! `<br>` after escaping.

use askama::Template;

use crate::error::MailError;
use crate::submission::ContactSubmission;

pub const BRAND: &str = "Falcon Creatives";
pub const ACCENT: &str = "#E83E6A";
pub const SUPPORT_EMAIL: &str = "falconcreativesplc@gmail.com";
pub const SUPPORT_PHONE: &str = "+251 98 553 5022";

/// A rendered outbound email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

mod filters {
    /// Line breaks to `<br>`. Chain after `e` so the input is already escaped.
    pub fn nl2br<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        Ok(s.to_string().replace("\r\n", "\n").replace('\n', "<br>"))
    }
}

#[derive(Template)]
#[template(path = "email/owner_notification.html")]
struct OwnerNotification<'a> {
    accent: &'a str,
    brand: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "email/sender_confirmation.html")]
struct SenderConfirmation<'a> {
    accent: &'a str,
    brand: &'a str,
    name: &'a str,
    message: &'a str,
    support_email: &'a str,
    support_phone: &'a str,
}

/// Email to the site owner; replies go to the sender.
pub fn owner_notification(
    sub: &ContactSubmission,
    from: &str,
    to: &str,
) -> Result<Email, MailError> {
    let html = OwnerNotification {
        accent: ACCENT,
        brand: BRAND,
        name: &sub.name,
        email: &sub.email,
        subject: &sub.subject,
        message: &sub.message,
    }
    .render()?;
    Ok(Email {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: Some(sub.email.clone()),
        subject: format!("New Contact Form Submission: {}", sub.subject),
        html,
    })
}

/// Acknowledgement sent back to the person who wrote in.
pub fn sender_confirmation(sub: &ContactSubmission, from: &str) -> Result<Email, MailError> {
    let html = SenderConfirmation {
        accent: ACCENT,
        brand: BRAND,
        name: &sub.name,
        message: &sub.message,
        support_email: SUPPORT_EMAIL,
        support_phone: SUPPORT_PHONE,
    }
    .render()?;
    Ok(Email {
        from: from.to_string(),
        to: sub.email.clone(),
        reply_to: None,
        subject: format!("Thank you for contacting {BRAND}"),
        html,
    })
}
