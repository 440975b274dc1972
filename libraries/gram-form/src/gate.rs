//! The submit gate: validation plus the single blocking alert.

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::fields::FieldSource;
use crate::validator::RegistrationValidator;

/// Receives the user-facing message when a submit attempt is blocked.
///
/// In the original form this is the blocking browser alert; hosts provide
/// whatever presentation fits.
pub trait AlertSink {
    /// Present one blocking message to the user.
    fn alert(&mut self, message: &str);
}

/// `AlertSink` that records messages, for tests and headless embeddings.
#[derive(Debug, Clone, Default)]
pub struct CollectedAlerts {
    messages: Vec<String>,
}

impl CollectedAlerts {
    /// Messages collected so far, in delivery order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl AlertSink for CollectedAlerts {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Default submission behavior may proceed
    Allow,
    /// Submission is cancelled; the alert has already been delivered
    Block(ValidationError),
}

/// Gates form submission on the validation rules.
///
/// Per blocked attempt exactly one alert is emitted, carrying the `Display`
/// text of the first violated rule. The user may correct the input and
/// resubmit; nothing is retried automatically.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitGate {
    validator: RegistrationValidator,
}

impl SubmitGate {
    /// Create a gate with the standard rule set.
    pub fn new() -> Self {
        Self {
            validator: RegistrationValidator::new(),
        }
    }

    /// Handle one submit attempt.
    pub fn submit(&self, fields: &impl FieldSource, alerts: &mut impl AlertSink) -> SubmitDecision {
        match self.validator.validate(fields) {
            Ok(()) => {
                debug!("Submit attempt passed validation");
                SubmitDecision::Allow
            }
            Err(err) => {
                warn!(error = %err, "Submit attempt blocked");
                alerts.alert(&err.to_string());
                SubmitDecision::Block(err)
            }
        }
    }
}
