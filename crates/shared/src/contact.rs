//! Contact form payloads, validation and the delivery seam.
//!
//! Validation runs in a fixed order and reports only the first failure, so the
//! same message shows up whether the check happens in the form state or on the
//! server.

use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiException;

pub const NAME_MAX_CHARS: usize = 50;
pub const SUBJECT_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

pub const SUBMITTED_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// Input length cap, mirroring the form's `maxLength` attributes.
    pub fn max_chars(self) -> Option<usize> {
        match self {
            ContactField::Name => Some(NAME_MAX_CHARS),
            ContactField::Subject => Some(SUBJECT_MAX_CHARS),
            ContactField::Message => Some(MESSAGE_MAX_CHARS),
            ContactField::Email | ContactField::Phone => None,
        }
    }
}

impl ContactRequest {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), ContactValidationError> {
    if request.name.trim().is_empty() {
        return Err(ContactValidationError::NameRequired);
    }
    if request.email.trim().is_empty() {
        return Err(ContactValidationError::EmailRequired);
    }
    if !is_plausible_email(&request.email) {
        return Err(ContactValidationError::EmailInvalid);
    }
    if request.message.trim().is_empty() {
        return Err(ContactValidationError::MessageRequired);
    }
    if request.message.chars().count() < MESSAGE_MIN_CHARS {
        return Err(ContactValidationError::MessageTooShort);
    }

    for (field, label) in [
        (ContactField::Name, "Name"),
        (ContactField::Subject, "Subject"),
        (ContactField::Message, "Message"),
    ] {
        if let Some(max) = field.max_chars() {
            if request.field(field).chars().count() > max {
                return Err(ContactValidationError::TooLong { field: label, max });
            }
        }
    }

    Ok(())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Loose shape check: something, `@`, something, `.`, something. Unanchored.
pub fn is_plausible_email(raw: &str) -> bool {
    email_pattern().is_match(raw)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub submission_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl ContactReceipt {
    pub fn issued_now() -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            received_at: Utc::now(),
            message: SUBMITTED_MESSAGE.to_string(),
        }
    }
}

/// Delivers a validated contact request somewhere.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn deliver(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiException>;
}
