//! Serverless relay: turns a contact POST into two emails.
//!
//! Flow: preflight/method check → parse → validate → owner notification →
//! sender confirmation. A mail failure at either send yields a 500; there is
//! no retry.

use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ContactError, MailError};
use crate::submission::ContactSubmission;
use crate::template::{owner_notification, sender_confirmation, Email, SUPPORT_EMAIL};

/// Outbound mail collaborator (SMTP, provider API, ...).
pub trait Mailer {
    fn send(&mut self, email: &Email) -> Result<(), MailError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub method: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl RelayRequest {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RelayResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body parsed as JSON; `Null` when empty or not JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Sender/recipient addresses for relay mail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Account the relay sends as (`EMAIL_USER`).
    pub from: String,
    /// Where notifications go (`CONTACT_EMAIL`, falling back to the site inbox).
    pub to: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from = lookup("EMAIL_USER")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ContactError::MissingConfig {
                key: "EMAIL_USER".into(),
            })?;
        let to = lookup("CONTACT_EMAIL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| SUPPORT_EMAIL.to_string());
        Ok(Self { from, to })
    }
}

fn cors_preflight_headers() -> Vec<(String, String)> {
    vec![
        ("Access-Control-Allow-Origin".into(), "*".into()),
        ("Access-Control-Allow-Headers".into(), "Content-Type".into()),
        ("Access-Control-Allow-Methods".into(), "POST, OPTIONS".into()),
    ]
}

fn respond(status: u16, body: serde_json::Value) -> RelayResponse {
    RelayResponse {
        status,
        headers: vec![
            ("Access-Control-Allow-Origin".into(), "*".into()),
            ("Content-Type".into(), "application/json".into()),
        ],
        body: body.to_string(),
    }
}

fn parse(body: Option<&str>) -> Result<ContactSubmission, ContactError> {
    let raw = body.ok_or_else(|| ContactError::MalformedBody {
        reason: "empty body".into(),
    })?;
    let sub: ContactSubmission = serde_json::from_str(raw)?;
    Ok(sub)
}

/// Handle one relay invocation.
pub fn handle<M: Mailer + ?Sized>(
    req: &RelayRequest,
    cfg: &RelayConfig,
    mailer: &mut M,
) -> RelayResponse {
    if req.method.eq_ignore_ascii_case("OPTIONS") {
        return RelayResponse {
            status: 200,
            headers: cors_preflight_headers(),
            body: String::new(),
        };
    }
    if !req.method.eq_ignore_ascii_case("POST") {
        return RelayResponse {
            status: 405,
            headers: cors_preflight_headers(),
            body: json!({ "error": "Method not allowed" }).to_string(),
        };
    }

    let sub = match parse(req.body.as_deref()).and_then(|s| s.validate().map(|_| s)) {
        Ok(sub) => sub,
        Err(e) => return respond(400, json!({ "error": e.to_string() })),
    };

    let sent = owner_notification(&sub, &cfg.from, &cfg.to)
        .and_then(|notification| mailer.send(&notification))
        .and_then(|_| sender_confirmation(&sub, &cfg.from))
        .and_then(|confirmation| mailer.send(&confirmation));

    match sent {
        Ok(()) => {
            info!("relayed contact message from {}", sub.email);
            respond(
                200,
                json!({ "success": true, "message": "Message sent successfully" }),
            )
        }
        Err(e) => {
            error!("Error sending email: {e}");
            respond(
                500,
                json!({ "error": "Failed to send message. Please try again later." }),
            )
        }
    }
}
