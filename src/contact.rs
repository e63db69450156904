use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::validation::{FormValidator, ValidationRule};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const INVALID_RESET: Duration = Duration::from_millis(3000);
pub const FAILURE_RESET: Duration = Duration::from_millis(5000);
pub const SUCCESS_RESET: Duration = Duration::from_millis(5000);

pub const SERVICE_ID_KEY: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_KEY: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_KEY: &str = "EMAILJS_PUBLIC_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("email relay is not configured: {key} is not set")]
    Missing { key: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has invalid fields")]
    Invalid,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to reach email relay: {0}")]
    Transport(String),
    #[error("email relay rejected message ({status}): {body}")]
    Rejected {
        status: http::StatusCode,
        body: String,
    },
}

/// Credentials for the hosted email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Read the credentials baked in at compile time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        fn require(value: Option<&str>, key: &'static str) -> Result<String, ConfigError> {
            match value.map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(ConfigError::Missing { key }),
            }
        }
        Ok(Self {
            service_id: require(service_id, SERVICE_ID_KEY)?,
            template_id: require(template_id, TEMPLATE_ID_KEY)?,
            public_key: require(public_key, PUBLIC_KEY_KEY)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

pub fn contact_validator() -> FormValidator {
    FormValidator::new([
        (
            "name",
            ValidationRule::new().required().min_length(2).max_length(50),
        ),
        ("email", ValidationRule::new().required().email()),
        (
            "subject",
            ValidationRule::new().required().min_length(3).max_length(100),
        ),
        (
            "message",
            ValidationRule::new().required().min_length(10).max_length(500),
        ),
    ])
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    fn new(config: &'a RelayConfig, msg: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_name: &msg.name,
                from_email: &msg.email,
                subject: &msg.subject,
                message: &msg.message,
            },
        }
    }
}

/// Something that can deliver a contact message as email.
#[allow(async_fn_in_trait)]
pub trait MailRelay {
    async fn send(&self, config: &RelayConfig, msg: &ContactMessage) -> Result<(), SubmitError>;
}

/// Relay backed by the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    url: String,
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(EMAILJS_SEND_URL)
    }
}

impl EmailJsRelay {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, config: &RelayConfig, msg: &ContactMessage) -> Result<(), SubmitError> {
        let res = self
            .client
            .post(&self.url)
            .json(&SendRequest::new(config, msg))
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(SubmitError::Rejected { status, body })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmitError),
}

impl SubmitStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A pending return to idle. Only honored if nothing else happened since it
/// was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    /// The form may be sent with this config.
    Send(RelayConfig),
    /// A submission is already in flight.
    Busy,
    /// Went straight to the error state.
    Failed(ResetTimer),
}

/// Submission state machine: idle -> submitting -> success | error -> idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFlow {
    status: SubmitStatus,
    generation: u64,
}

impl SubmissionFlow {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    fn settle(&mut self, status: SubmitStatus, delay: Duration) -> ResetTimer {
        self.generation += 1;
        log::debug!("contact submission settled: {status:?}");
        self.status = status;
        ResetTimer {
            generation: self.generation,
            delay,
        }
    }

    /// Try to leave idle. `form_valid` is the result of validating every
    /// field; `config` is the relay configuration lookup.
    pub fn begin(&mut self, form_valid: bool, config: Result<RelayConfig, ConfigError>) -> Begin {
        if self.is_submitting() {
            return Begin::Busy;
        }
        if !form_valid {
            return Begin::Failed(self.settle(SubmitStatus::Error(SubmitError::Invalid), INVALID_RESET));
        }
        match config {
            Ok(config) => {
                self.generation += 1;
                self.status = SubmitStatus::Submitting;
                Begin::Send(config)
            }
            Err(e) => {
                log::error!("{e}");
                Begin::Failed(self.settle(SubmitStatus::Error(e.into()), FAILURE_RESET))
            }
        }
    }

    /// Record the outcome of the relay call.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> ResetTimer {
        match outcome {
            Ok(()) => self.settle(SubmitStatus::Success, SUCCESS_RESET),
            Err(e) => {
                log::error!("failed to send contact message: {e}");
                self.settle(SubmitStatus::Error(e), FAILURE_RESET)
            }
        }
    }

    /// Return to idle if `timer` is still the latest scheduled reset.
    pub fn reset(&mut self, timer: ResetTimer) -> bool {
        if timer.generation != self.generation || self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}

/// Everything the contact section keeps between events: the entered
/// values, their validation state and the submission flow.
#[derive(Debug, Clone)]
pub struct ContactForm {
    message: ContactMessage,
    validator: FormValidator,
    flow: SubmissionFlow,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            message: ContactMessage::default(),
            validator: contact_validator(),
            flow: SubmissionFlow::default(),
        }
    }
}

impl ContactForm {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn value(&self, field: &str) -> &str {
        self.message.field(field).unwrap_or_default()
    }

    pub fn status(&self) -> &SubmitStatus {
        self.flow.status()
    }

    pub fn is_submitting(&self) -> bool {
        self.flow.is_submitting()
    }

    pub fn error_message(&self, field: &str) -> Option<&str> {
        self.validator.error_message(field)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.validator.has_error(field)
    }

    /// Shown as valid once something was entered and no error is visible.
    pub fn looks_valid(&self, field: &str) -> bool {
        !self.value(field).is_empty() && !self.has_error(field)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.validator.is_touched(field)
    }

    /// Store a new value and validate it in real time.
    pub fn set_field(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.message.name,
            "email" => &mut self.message.email,
            "subject" => &mut self.message.subject,
            "message" => &mut self.message.message,
            _ => return,
        };
        *slot = value;
        self.validator.validate_field(field, slot);
    }

    pub fn touch(&mut self, field: &str) {
        self.validator.mark_touched(field);
    }

    /// Validate everything and try to start sending.
    pub fn begin(&mut self, config: Result<RelayConfig, ConfigError>) -> Begin {
        if self.flow.is_submitting() {
            return Begin::Busy;
        }
        let valid = self.validator.validate_all(|f| self.message.field(f));
        self.flow.begin(valid, config)
    }

    /// Apply the relay outcome. Success clears the form and its validation
    /// state; failure keeps what the user typed.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> ResetTimer {
        if outcome.is_ok() {
            self.message = ContactMessage::default();
            self.validator.clear();
        }
        self.flow.finish(outcome)
    }

    pub fn reset(&mut self, timer: ResetTimer) -> bool {
        self.flow.reset(timer)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    struct FakeRelay {
        outcome: Result<(), SubmitError>,
        calls: Cell<usize>,
        last: RefCell<Option<ContactMessage>>,
    }

    impl FakeRelay {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl MailRelay for FakeRelay {
        async fn send(&self, _config: &RelayConfig, msg: &ContactMessage) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(msg.clone());
            self.outcome.clone()
        }
    }

    fn config() -> RelayConfig {
        RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("pub")).unwrap()
    }

    fn valid_form() -> ContactMessage {
        ContactMessage {
            name: "Hans".to_string(),
            email: "hans@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    #[test]
    fn test_config_requires_every_value() {
        assert_eq!(
            RelayConfig::from_parts(None, Some("t"), Some("p")),
            Err(ConfigError::Missing {
                key: SERVICE_ID_KEY
            })
        );
        assert_eq!(
            RelayConfig::from_parts(Some("s"), Some("  "), Some("p")),
            Err(ConfigError::Missing {
                key: TEMPLATE_ID_KEY
            })
        );
        assert_eq!(
            RelayConfig::from_parts(Some("s"), Some("t"), None),
            Err(ConfigError::Missing {
                key: PUBLIC_KEY_KEY
            })
        );
        assert!(RelayConfig::from_parts(Some("s"), Some("t"), Some("p")).is_ok());
    }

    #[test]
    fn test_send_request_shape() {
        let config = config();
        let msg = valid_form();
        let json = serde_json::to_value(SendRequest::new(&config, &msg)).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "pub");
        assert_eq!(json["template_params"]["from_name"], "Hans");
        assert_eq!(json["template_params"]["from_email"], "hans@example.com");
        assert_eq!(json["template_params"]["subject"], "Hello");
    }

    #[test]
    fn test_invalid_form_never_submits() {
        let mut flow = SubmissionFlow::default();
        let res = flow.begin(false, Ok(config()));
        let Begin::Failed(timer) = res else {
            panic!("invalid form should fail, got {res:?}");
        };
        assert_eq!(timer.delay, INVALID_RESET);
        assert_eq!(flow.status(), &SubmitStatus::Error(SubmitError::Invalid));
    }

    #[test]
    fn test_missing_config_fails_immediately() {
        let mut flow = SubmissionFlow::default();
        let res = flow.begin(
            true,
            Err(ConfigError::Missing {
                key: SERVICE_ID_KEY,
            }),
        );
        let Begin::Failed(timer) = res else {
            panic!("missing config should fail, got {res:?}");
        };
        assert_eq!(timer.delay, FAILURE_RESET);
        assert!(flow.status().is_error());

        assert!(flow.reset(timer));
        assert_eq!(flow.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_busy_while_submitting() {
        let mut flow = SubmissionFlow::default();
        assert_eq!(flow.begin(true, Ok(config())), Begin::Send(config()));
        assert!(flow.is_submitting());
        assert_eq!(flow.begin(true, Ok(config())), Begin::Busy);
        assert_eq!(flow.begin(false, Ok(config())), Begin::Busy);
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut flow = SubmissionFlow::default();
        let Begin::Failed(first) = flow.begin(false, Ok(config())) else {
            panic!("expected failure");
        };
        // user fixes the form and resubmits before the first banner clears
        assert!(matches!(flow.begin(true, Ok(config())), Begin::Send(_)));
        assert!(!flow.reset(first));
        assert!(flow.is_submitting());

        let second = flow.finish(Ok(()));
        assert!(!flow.reset(first));
        assert_eq!(flow.status(), &SubmitStatus::Success);
        assert_eq!(second.delay, SUCCESS_RESET);
        assert!(flow.reset(second));
        assert_eq!(flow.status(), &SubmitStatus::Idle);
    }

    /// Drive one submission the way the contact section does.
    async fn submit(
        relay: &FakeRelay,
        form: &mut ContactForm,
        config: Result<RelayConfig, ConfigError>,
    ) -> Option<ResetTimer> {
        match form.begin(config) {
            Begin::Send(config) => {
                let outcome = relay.send(&config, form.message()).await;
                Some(form.finish(outcome))
            }
            Begin::Busy => None,
            Begin::Failed(timer) => Some(timer),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        let msg = valid_form();
        form.set_field("name", msg.name);
        form.set_field("email", msg.email);
        form.set_field("subject", msg.subject);
        form.set_field("message", msg.message);
        form
    }

    #[test]
    fn test_set_field_validates_in_real_time() {
        let mut form = ContactForm::default();
        form.set_field("name", "H".to_string());
        assert_eq!(form.value("name"), "H");
        // not visible until the field is left
        assert_eq!(form.error_message("name"), None);
        form.touch("name");
        assert_eq!(
            form.error_message("name"),
            Some("Name must be at least 2 characters")
        );

        form.set_field("name", "Hans".to_string());
        assert_eq!(form.error_message("name"), None);
        assert!(form.looks_valid("name"));
        assert!(!form.looks_valid("email"));

        form.set_field("phone", "123".to_string());
        assert_eq!(form.value("phone"), "");
    }

    #[test]
    fn test_empty_name_blurred_shows_required() {
        let mut form = ContactForm::default();
        form.set_field("name", String::new());
        form.touch("name");
        assert!(form.has_error("name"));
        assert_eq!(form.error_message("name"), Some("Name is required"));
    }

    #[tokio::test]
    async fn test_submit_success_clears_form() {
        let relay = FakeRelay::new(Ok(()));
        let mut form = filled_form();
        form.touch("name");

        let timer = submit(&relay, &mut form, Ok(config()))
            .await
            .expect("should schedule a reset");

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.last.borrow().as_ref(), Some(&valid_form()));
        assert_eq!(form.status(), &SubmitStatus::Success);
        assert_eq!(form.message(), &ContactMessage::default());
        assert!(!form.is_touched("name"));
        assert_eq!(timer.delay, SUCCESS_RESET);
        assert!(form.reset(timer));
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_submit_invalid_email_is_blocked() {
        let relay = FakeRelay::new(Ok(()));
        let mut form = filled_form();
        form.set_field("email", "foo".to_string());
        form.touch("name");
        form.touch("email");

        let timer = submit(&relay, &mut form, Ok(config()))
            .await
            .expect("should schedule a reset");

        assert_eq!(relay.calls.get(), 0);
        assert_eq!(timer.delay, INVALID_RESET);
        assert_eq!(
            form.error_message("email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.error_message("name"), None);
        assert_eq!(form.value("email"), "foo");
        assert_ne!(form.status(), &SubmitStatus::Success);
    }

    #[tokio::test]
    async fn test_submit_missing_config_keeps_values() {
        let relay = FakeRelay::new(Ok(()));
        let mut form = filled_form();

        let timer = submit(
            &relay,
            &mut form,
            Err(ConfigError::Missing {
                key: PUBLIC_KEY_KEY,
            }),
        )
        .await
        .expect("should schedule a reset");

        assert_eq!(relay.calls.get(), 0);
        assert_eq!(
            form.status(),
            &SubmitStatus::Error(SubmitError::Config(ConfigError::Missing {
                key: PUBLIC_KEY_KEY
            }))
        );
        assert_eq!(timer.delay, FAILURE_RESET);
        assert_eq!(form.message(), &valid_form());
        assert!(form.reset(timer));
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_submit_transport_error_keeps_values() {
        let relay = FakeRelay::new(Err(SubmitError::Transport("offline".to_string())));
        let mut form = filled_form();

        let timer = submit(&relay, &mut form, Ok(config()))
            .await
            .expect("should schedule a reset");

        assert_eq!(relay.calls.get(), 1);
        assert!(form.status().is_error());
        assert_eq!(timer.delay, FAILURE_RESET);
        assert_eq!(form.message(), &valid_form());
    }

    #[test]
    fn test_begin_ignored_while_sending() {
        let mut form = filled_form();
        assert!(matches!(form.begin(Ok(config())), Begin::Send(_)));
        assert!(form.is_submitting());
        assert_eq!(form.begin(Ok(config())), Begin::Busy);
    }
}
