use serde::{Deserialize, Serialize};

use crate::foundation::error::{FathomError, FathomResult};

/// Recipient used when no contact address is configured.
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@example.com";

/// Body of a contact form submission. Every field is optional on the wire and checked by
/// [`ContactRequest::validate`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactRequest {
    /// Sender name.
    pub name: Option<String>,
    /// Message subject.
    pub subject: Option<String>,
    /// Sender address.
    pub email: Option<String>,
    /// Message body.
    pub message: Option<String>,
}

/// A submission with every field present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Message subject.
    pub subject: String,
    /// Sender address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactRequest {
    /// Require every field to be present and non-empty.
    pub fn validate(self) -> FathomResult<ContactMessage> {
        let take = |v: Option<String>| v.filter(|s| !s.is_empty());
        match (
            take(self.name),
            take(self.subject),
            take(self.email),
            take(self.message),
        ) {
            (Some(name), Some(subject), Some(email), Some(message)) => Ok(ContactMessage {
                name,
                subject,
                email,
                message,
            }),
            _ => Err(FathomError::validation(
                "Missing required fields: name, subject, email, message",
            )),
        }
    }
}

/// The mail that would be sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MailPreview {
    /// Recipient.
    pub to: String,
    /// Sender address from the form.
    pub from: String,
    /// Subject from the form.
    pub subject: String,
    /// Plain-text body.
    pub text: String,
}

/// Response to an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactResponse {
    /// Always `true` for an accepted submission.
    pub success: bool,
    /// Status text.
    pub message: String,
    /// The composed mail.
    pub preview: MailPreview,
}

impl ContactMessage {
    /// Compose the mail for `to`. Nothing is sent.
    pub fn preview(&self, to: &str) -> ContactResponse {
        ContactResponse {
            success: true,
            message: "Email would be sent here".to_string(),
            preview: MailPreview {
                to: to.to_string(),
                from: self.email.clone(),
                subject: self.subject.clone(),
                text: format!("From: {} ({})\n\n{}", self.name, self.email, self.message),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/message.rs"]
mod tests;
