//! Contact form plumbing for the agency site.
//!
//! - [`submission`]: the `{ name, email, subject, message }` payload and its validation
//! - [`form`]: the browser-side submit flow over an injectable [`Transport`]
//! - [`relay`]: the serverless handler that emails the owner and the sender via a [`Mailer`]
//! - [`template`]: the two HTML email bodies

pub mod error;
pub mod form;
pub mod relay;
pub mod submission;
pub mod template;

pub use error::{ContactError, MailError, TransportError};
pub use form::{ContactForm, Field, Notification, Severity, SubmitOutcome, Transport};
pub use relay::{handle, Mailer, RelayConfig, RelayRequest, RelayResponse};
pub use submission::{is_valid_email, ContactSubmission};
pub use template::Email;
