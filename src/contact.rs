use std::future::Future;
use std::sync::LazyLock;

use http::StatusCode;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::notify::NotificationKind;

pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Message sent. I'll reply within 1 business day.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Try again later or email me directly.";
const REJECTED_FALLBACK: &str = "Failed to send message";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please include at least {} characters in your message.", MIN_MESSAGE_CHARS)]
    MessageTooShort,
    #[error("{}", rejected_text(.message))]
    Rejected { status: u16, message: Option<String> },
    #[error("{}", GENERIC_FAILURE)]
    MalformedResponse,
    #[error("{}", GENERIC_FAILURE)]
    Transport(String),
}

fn rejected_text(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(REJECTED_FALLBACK)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

pub fn is_message_long_enough(message: &str) -> bool {
    message.trim().chars().count() >= MIN_MESSAGE_CHARS
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden from people; bots fill it in.
    pub honeypot: String,
}

impl ContactForm {
    pub fn is_spam(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// Checks run in submission order: email first, then message.
    pub fn validate(&self) -> Result<(), ContactError> {
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if !is_message_long_enough(&self.message) {
            return Err(ContactError::MessageTooShort);
        }
        Ok(())
    }

    pub fn payload(&self) -> ContactPayload {
        let email = self.email.trim().to_string();
        ContactPayload {
            name: self.name.trim().to_string(),
            reply_to: email.clone(),
            email,
            message: self.message.trim().to_string(),
            hp: self.honeypot.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// JSON body sent to the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    pub hp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

/// First non-blank string among `error`, `message` and `errors[].message`.
/// Fields of any other shape are skipped rather than failing the whole body.
fn relay_message(body: &Value) -> Option<String> {
    let non_blank = |v: &Value| v.as_str().filter(|s| !s.trim().is_empty()).map(str::to_string);
    body.get("error")
        .and_then(non_blank)
        .or_else(|| body.get("message").and_then(non_blank))
        .or_else(|| {
            body.get("errors")
                .and_then(Value::as_array)?
                .iter()
                .find_map(|e| e.get("message").and_then(non_blank))
        })
}

impl RelayResponse {
    /// Success needs a 2xx status and a JSON body.
    pub fn interpret(&self) -> Result<(), ContactError> {
        let parsed = serde_json::from_str::<Value>(&self.body);
        let is_success = StatusCode::from_u16(self.status)
            .map(|s| s.is_success())
            .unwrap_or(false);
        match (is_success, parsed) {
            (true, Ok(_)) => Ok(()),
            (true, Err(e)) => {
                log::warn!("relay returned an unreadable body: {e}");
                Err(ContactError::MalformedResponse)
            }
            (false, parsed) => {
                let message = parsed.ok().as_ref().and_then(relay_message);
                Err(ContactError::Rejected {
                    status: self.status,
                    message,
                })
            }
        }
    }
}

/// Sends the payload to the relay. Implementations report only transport
/// failures as errors; any HTTP response comes back as a [`RelayResponse`].
pub trait Transport {
    fn post_json(
        &self,
        endpoint: &str,
        payload: &ContactPayload,
    ) -> impl Future<Output = Result<RelayResponse, ContactError>>;
}

/// Browser `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &ContactPayload,
    ) -> Result<RelayResponse, ContactError> {
        use gloo_net::http::Request;

        let transport_err = |e: gloo_net::Error| ContactError::Transport(e.to_string());
        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_err)?;
        Ok(RelayResponse { status, body })
    }
}

#[cfg(not(feature = "hydrate"))]
impl Transport for FetchTransport {
    async fn post_json(
        &self,
        _endpoint: &str,
        _payload: &ContactPayload,
    ) -> Result<RelayResponse, ContactError> {
        Err(ContactError::Transport(
            "fetch is only available in the browser".to_string(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Busy,
    /// Honeypot was filled in.
    Dropped,
    /// Failed validation before any request.
    Rejected(ContactError),
    Sent,
    Failed(ContactError),
}

impl SubmitOutcome {
    pub fn notification(&self) -> Option<(NotificationKind, String)> {
        match self {
            Self::Busy | Self::Dropped => None,
            Self::Sent => Some((NotificationKind::Success, SUCCESS_MESSAGE.to_string())),
            Self::Rejected(e) | Self::Failed(e) => Some((NotificationKind::Error, e.to_string())),
        }
    }

    /// Whether focus goes back to the live status region.
    pub fn refocus_status(&self) -> bool {
        !matches!(self, Self::Busy | Self::Dropped)
    }
}

pub enum Begin {
    Send(ContactPayload),
    Done(SubmitOutcome),
}

#[derive(Debug, Clone, Default)]
pub struct ContactWorkflow {
    form: ContactForm,
    state: SubmitState,
}

impl ContactWorkflow {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && !self.form.name.trim().is_empty()
            && !self.form.is_spam()
            && self.form.validate().is_ok()
    }

    /// Replaces the message, used by the booking and pricing dialogs.
    pub fn prefill_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
    }

    /// Runs the pre-flight checks. On [`Begin::Send`] the workflow is
    /// `Submitting` until [`ContactWorkflow::settle`] is called.
    pub fn begin(&mut self) -> Begin {
        if self.is_submitting() {
            return Begin::Done(SubmitOutcome::Busy);
        }
        if self.form.is_spam() {
            log::debug!("honeypot filled, dropping submission");
            return Begin::Done(SubmitOutcome::Dropped);
        }
        if let Err(e) = self.form.validate() {
            return Begin::Done(SubmitOutcome::Rejected(e));
        }
        self.state = SubmitState::Submitting;
        Begin::Send(self.form.payload())
    }

    pub fn settle(&mut self, response: Result<RelayResponse, ContactError>) -> SubmitOutcome {
        self.state = SubmitState::Idle;
        match response.and_then(|r| r.interpret()) {
            Ok(()) => {
                self.form.clear();
                SubmitOutcome::Sent
            }
            Err(e) => {
                log::error!("contact send error: {e:?}");
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub async fn submit<T: Transport>(&mut self, transport: &T, endpoint: &str) -> SubmitOutcome {
        match self.begin() {
            Begin::Done(outcome) => outcome,
            Begin::Send(payload) => {
                let response = transport.post_json(endpoint, &payload).await;
                self.settle(response)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeTransport {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactPayload>>,
        reply: Result<RelayResponse, ContactError>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self::new(Ok(RelayResponse {
                status,
                body: body.to_string(),
            }))
        }

        fn new(reply: Result<RelayResponse, ContactError>) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl Transport for FakeTransport {
        async fn post_json(
            &self,
            _endpoint: &str,
            payload: &ContactPayload,
        ) -> Result<RelayResponse, ContactError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn filled() -> ContactWorkflow {
        let mut workflow = ContactWorkflow::default();
        let form = workflow.form_mut();
        form.name = "Jane".to_string();
        form.email = "jane@example.com".to_string();
        form.message = "Hello, I'd like to discuss a project.".to_string();
        workflow
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["jane@example.com", "A.B@Sub.Example.ORG", "x@y.z"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "",
            "not-an-email",
            "jane@example",
            "jane example@x.com",
            " jane@example.com",
            "jane@@example.com",
            "@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_message_length_is_trimmed() {
        assert!(!is_message_long_enough("   short    "));
        assert!(!is_message_long_enough("123456789"));
        assert!(is_message_long_enough("  1234567890  "));
    }

    #[test]
    fn test_payload_trims_and_sets_reply_to() {
        let mut workflow = filled();
        workflow.form_mut().email = "jane@example.com ".to_string();
        workflow.form_mut().name = "  Jane ".to_string();
        let payload = workflow.form().payload();
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.reply_to, "jane@example.com");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["_replyto"], "jane@example.com");
        assert_eq!(json["hp"], "");
        assert!(json.get("reply_to").is_none());
    }

    #[tokio::test]
    async fn test_successful_submission_clears_form() {
        let transport = FakeTransport::replying(200, r#"{"ok":true}"#);
        let mut workflow = filled();

        let outcome = workflow.submit(&transport, "https://relay.test/f/1").await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(workflow.form(), &ContactForm::default());
        assert_eq!(workflow.state(), SubmitState::Idle);
        let (kind, text) = outcome.notification().unwrap();
        assert_eq!(kind, NotificationKind::Success);
        assert_eq!(text, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_email_never_hits_network() {
        let transport = FakeTransport::replying(200, "{}");
        let mut workflow = filled();
        workflow.form_mut().email = "not-an-email".to_string();
        let before = workflow.form().clone();

        let outcome = workflow.submit(&transport, "https://relay.test").await;

        assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::InvalidEmail));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(workflow.form(), &before);
        assert_eq!(
            outcome.notification().map(|(_, text)| text).as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[tokio::test]
    async fn test_short_message_never_hits_network() {
        let transport = FakeTransport::replying(200, "{}");
        let mut workflow = filled();
        workflow.form_mut().message = "  hi there ".to_string();

        let outcome = workflow.submit(&transport, "https://relay.test").await;

        assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::MessageTooShort));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(
            outcome.notification().map(|(_, text)| text).as_deref(),
            Some("Please include at least 10 characters in your message.")
        );
    }

    #[tokio::test]
    async fn test_honeypot_is_silent() {
        let transport = FakeTransport::replying(200, "{}");
        let mut workflow = filled();
        workflow.form_mut().honeypot = "buy now".to_string();
        workflow.form_mut().email = "not-an-email".to_string();

        let outcome = workflow.submit(&transport, "https://relay.test").await;

        assert_eq!(outcome, SubmitOutcome::Dropped);
        assert_eq!(transport.calls.get(), 0);
        assert!(outcome.notification().is_none());
        assert!(!outcome.refocus_status());
    }

    #[test]
    fn test_in_flight_submission_blocks_duplicates() {
        let mut workflow = filled();
        let first = workflow.begin();
        assert!(matches!(first, Begin::Send(_)));
        assert!(workflow.is_submitting());
        assert!(!workflow.can_submit());

        assert!(matches!(workflow.begin(), Begin::Done(SubmitOutcome::Busy)));

        let outcome = workflow.settle(Err(ContactError::Transport("offline".to_string())));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(workflow.state(), SubmitState::Idle);
        assert!(matches!(workflow.begin(), Begin::Send(_)));
    }

    #[tokio::test]
    async fn test_server_message_is_preferred() {
        let transport = FakeTransport::replying(422, r#"{"error":"Form not found"}"#);
        let mut workflow = filled();
        let before = workflow.form().clone();

        let outcome = workflow.submit(&transport, "https://relay.test").await;

        assert_eq!(
            outcome.notification(),
            Some((NotificationKind::Error, "Form not found".to_string()))
        );
        assert_eq!(workflow.form(), &before);
        assert!(outcome.refocus_status());
    }

    #[test]
    fn test_rejected_message_fallbacks() {
        let rejected = |status, body: &str| {
            RelayResponse {
                status,
                body: body.to_string(),
            }
            .interpret()
            .unwrap_err()
            .to_string()
        };
        assert_eq!(rejected(400, r#"{"message":"Slow down"}"#), "Slow down");
        assert_eq!(
            rejected(400, r#"{"errors":[{"field":"email","message":"should be an email"}]}"#),
            "should be an email"
        );
        assert_eq!(rejected(500, "<html>oops</html>"), "Failed to send message");
        assert_eq!(rejected(500, r#"{"error":"  "}"#), "Failed to send message");
        assert_eq!(rejected(400, r#"{"error":"","message":"Slow down"}"#), "Slow down");
        assert_eq!(
            rejected(400, r#"{"error":" ","message":"","errors":[{"message":""},{"message":"too long"}]}"#),
            "too long"
        );
    }

    #[test]
    fn test_rejected_message_skips_unexpected_shapes() {
        let response = RelayResponse {
            status: 422,
            body: r#"{"error":{"code":"X"},"message":42,"errors":[{"field":"email"},{"message":"bad email"}]}"#
                .to_string(),
        };
        assert_eq!(response.interpret().unwrap_err().to_string(), "bad email");

        let response = RelayResponse {
            status: 422,
            body: r#"{"errors":"nope"}"#.to_string(),
        };
        assert_eq!(
            response.interpret(),
            Err(ContactError::Rejected {
                status: 422,
                message: None
            })
        );
    }

    #[test]
    fn test_success_requires_json_body() {
        let ok = RelayResponse {
            status: 201,
            body: r#"{"next":"/thanks"}"#.to_string(),
        };
        assert_eq!(ok.interpret(), Ok(()));

        let garbled = RelayResponse {
            status: 200,
            body: "<html>".to_string(),
        };
        assert_eq!(garbled.interpret(), Err(ContactError::MalformedResponse));
        assert_eq!(ContactError::MalformedResponse.to_string(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_transport_error_uses_generic_text() {
        let transport = FakeTransport::new(Err(ContactError::Transport(
            "TypeError: Failed to fetch".to_string(),
        )));
        let mut workflow = filled();

        let outcome = workflow.submit(&transport, "https://relay.test").await;

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(
            outcome.notification().map(|(_, text)| text).as_deref(),
            Some(GENERIC_FAILURE)
        );
        assert!(!workflow.is_submitting());
    }

    #[tokio::test]
    async fn test_sends_single_request_with_expected_payload() {
        let transport = FakeTransport::replying(200, "{}");
        let mut workflow = filled();
        workflow.submit(&transport, "https://relay.test").await;

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "jane@example.com");
        assert_eq!(sent[0].message, "Hello, I'd like to discuss a project.");
    }

    #[test]
    fn test_can_submit_requires_name() {
        let mut workflow = filled();
        assert!(workflow.can_submit());
        workflow.form_mut().name = "   ".to_string();
        assert!(!workflow.can_submit());
    }
}
