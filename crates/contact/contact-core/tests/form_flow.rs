use contact_core::form::{DEFAULT_ENDPOINT, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use contact_core::{
    ContactForm, ContactSubmission, Field, Severity, SubmitOutcome, Transport, TransportError,
};

/// Records every POST and answers with a scripted result.
struct Recorder {
    reply: Result<u16, TransportError>,
    posts: Vec<(String, serde_json::Value)>,
}

impl Recorder {
    fn replying(reply: Result<u16, TransportError>) -> Self {
        Self {
            reply,
            posts: Vec::new(),
        }
    }
}

impl Transport for Recorder {
    fn post_json(&mut self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError> {
        self.posts.push((url.to_string(), body.clone()));
        self.reply.clone()
    }
}

fn filled_from_fixture() -> (ContactForm, ContactSubmission) {
    let sub: ContactSubmission =
        countup_test_fixtures::contact::load("valid").expect("valid submission fixture");
    let mut form = ContactForm::default();
    form.set(Field::Name, sub.name.clone());
    form.set(Field::Email, sub.email.clone());
    form.set(Field::Subject, sub.subject.clone());
    form.set(Field::Message, sub.message.clone());
    (form, sub)
}

#[test]
fn success_posts_payload_and_clears_form() {
    let (mut form, sub) = filled_from_fixture();
    let mut transport = Recorder::replying(Ok(200));

    assert_eq!(form.submit(&mut transport), SubmitOutcome::Sent { status: 200 });

    assert_eq!(transport.posts.len(), 1);
    let (url, body) = &transport.posts[0];
    assert_eq!(url, DEFAULT_ENDPOINT);
    assert_eq!(body["name"], sub.name.as_str());
    assert_eq!(body["email"], sub.email.as_str());
    assert_eq!(body["subject"], sub.subject.as_str());
    assert_eq!(body["message"], sub.message.as_str());

    assert_eq!(form.fields(), &ContactSubmission::default());
    let note = form.notification().unwrap();
    assert_eq!(note.severity, Severity::Success);
    assert_eq!(note.message, SUCCESS_MESSAGE);
    assert!(!form.is_loading());
}

#[test]
fn server_error_keeps_contents() {
    let (mut form, sub) = filled_from_fixture();
    let mut transport = Recorder::replying(Ok(500));

    assert_eq!(form.submit(&mut transport), SubmitOutcome::Rejected { status: 500 });
    assert_eq!(form.fields(), &sub);
    let note = form.notification().unwrap();
    assert_eq!(note.severity, Severity::Error);
    assert_eq!(note.message, FAILURE_MESSAGE);
}

#[test]
fn network_failure_keeps_contents_and_does_not_retry() {
    let (mut form, sub) = filled_from_fixture();
    let mut transport = Recorder::replying(Err(TransportError::new("connection reset")));

    let outcome = form.submit(&mut transport);
    assert!(matches!(outcome, SubmitOutcome::Unreachable(_)));
    assert_eq!(transport.posts.len(), 1);
    assert_eq!(form.fields(), &sub);
    assert_eq!(form.notification().unwrap().severity, Severity::Error);
}

#[test]
fn custom_endpoint_is_used() {
    let (_, sub) = filled_from_fixture();
    let mut form = ContactForm::new("https://example.test/contact");
    form.set(Field::Name, sub.name);
    form.set(Field::Email, sub.email);
    form.set(Field::Subject, sub.subject);
    form.set(Field::Message, sub.message);
    let mut transport = Recorder::replying(Ok(201));
    form.submit(&mut transport);
    assert_eq!(transport.posts[0].0, "https://example.test/contact");
}
