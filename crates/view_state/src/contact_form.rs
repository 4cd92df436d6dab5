use shared::{
    contact::{
        validate_contact, ContactField, ContactReceipt, ContactRequest, ContactTransport,
        DELIVERY_FAILED_MESSAGE, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS,
    },
    error::ApiException,
};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    request: ContactRequest,
    status: SubmitStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Replaces a field, cut to its length cap. Inputs are locked while a
    /// submission is in flight.
    pub fn update(&mut self, field: ContactField, value: &str) {
        if self.is_submitting() {
            return;
        }
        let value = match field.max_chars() {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        *self.request.field_mut(field) = value;
    }

    pub fn message_counter(&self) -> String {
        format!(
            "{}/{MESSAGE_MAX_CHARS}",
            self.request.message.chars().count()
        )
    }

    /// Shown under the message box while it holds too little text.
    pub fn message_hint(&self) -> Option<String> {
        let len = self.request.message.chars().count();
        (len > 0 && len < MESSAGE_MIN_CHARS)
            .then(|| format!("Message must be at least {MESSAGE_MIN_CHARS} characters"))
    }

    /// Validates and moves to `Submitting`, handing back the payload to send.
    /// Returns `None` when validation failed or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.is_submitting() {
            return None;
        }
        if let Err(err) = validate_contact(&self.request) {
            self.status = SubmitStatus::Failed(err.to_string());
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.request.clone())
    }

    pub fn complete(&mut self, outcome: Result<ContactReceipt, ApiException>) {
        match outcome {
            Ok(receipt) => {
                info!(submission_id = %receipt.submission_id, "contact form submitted");
                self.request = ContactRequest::default();
                self.status = SubmitStatus::Succeeded(receipt.message);
            }
            Err(err) => {
                warn!(error = %err, "contact form delivery failed");
                self.status = SubmitStatus::Failed(DELIVERY_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn submit(&mut self, transport: &dyn ContactTransport) -> &SubmitStatus {
        if let Some(request) = self.begin_submit() {
            let outcome = transport.deliver(&request).await;
            self.complete(outcome);
        }
        &self.status
    }
}

#[cfg(test)]
#[path = "tests/contact_form_tests.rs"]
mod tests;
