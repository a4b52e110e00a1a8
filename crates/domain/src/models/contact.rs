//! Contact form submission and the notification built from it.

use serde::{Deserialize, Serialize};
use shared::html;
use thiserror::Error;

/// Message shown to the visitor when a submission has a blank field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required!";

/// Message shown to the visitor after a submission is accepted.
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Message shown when delivery failed and the failure is reported.
pub const FAILED_MESSAGE: &str =
    "Sorry, your message could not be delivered right now. Please try again later.";

/// Raw contact form fields, as posted by the browser or API client.
///
/// Missing fields deserialize as empty strings so they are rejected by
/// [`ContactSubmission::parse`] rather than by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Rejection for a contact submission with blank fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("All fields are required (missing: {})", .missing.join(", "))]
pub struct ContactValidationError {
    pub missing: Vec<&'static str>,
}

/// A trimmed contact submission with every field non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Trims every field and rejects the submission if any is empty.
    pub fn parse(
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        let missing: Vec<&'static str> = [("name", name), ("email", email), ("message", message)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(ContactValidationError { missing });
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ContactValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        Self::parse(&form.name, &form.email, &form.message)
    }
}

/// Subject and bodies of the email sent to the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification {
    pub subject: String,
    pub body_html: String,
    pub body_text: String,
}

impl ContactNotification {
    /// Builds the notification for a submission.
    ///
    /// Every submitted value is HTML-escaped in the HTML body. The plain text
    /// body carries the values verbatim.
    pub fn for_submission(submission: &ContactSubmission) -> Self {
        let subject = format!("Portfolio Contact: {}", submission.name());

        let name = html::escape(submission.name());
        let email = html::escape(submission.email());
        let message = html::escape_multiline(submission.message());

        let body_html = format!(
            r#"<div style="font-family:Arial,sans-serif;max-width:600px;margin:auto;padding:20px;background:#0d1b2a;color:#e0e0e0;border-radius:10px;">
    <h2 style="color:#0d6efd;border-bottom:1px solid #1a3a5c;padding-bottom:10px;">New Contact Message</h2>
    <p><strong style="color:#6ea8fe;">Name:</strong> {name}</p>
    <p><strong style="color:#6ea8fe;">Email:</strong> <a href="mailto:{email}" style="color:#0d6efd;">{email}</a></p>
    <p><strong style="color:#6ea8fe;">Message:</strong></p>
    <div style="background:#112240;padding:15px;border-radius:8px;margin-top:5px;">
        {message}
    </div>
    <hr style="border-color:#1a3a5c;margin-top:20px;">
    <p style="color:#888;font-size:12px;">Sent from your portfolio website</p>
</div>"#
        );

        let body_text = format!(
            "New Contact Message\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n\n--\nSent from your portfolio website\n",
            submission.name(),
            submission.email(),
            submission.message()
        );

        Self {
            subject,
            body_html,
            body_text,
        }
    }
}

/// Bootstrap-style alert level of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

/// The outcome of a contact submission, as remembered between the form POST
/// and the page load that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    ContactSent,
    ContactFailed,
    ContactInvalid,
}

impl FlashKind {
    /// Converts to the string stored in the flash cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::ContactSent => "contact_sent",
            FlashKind::ContactFailed => "contact_failed",
            FlashKind::ContactInvalid => "contact_invalid",
        }
    }

    /// Parses the string stored in the flash cookie.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contact_sent" => Some(FlashKind::ContactSent),
            "contact_failed" => Some(FlashKind::ContactFailed),
            "contact_invalid" => Some(FlashKind::ContactInvalid),
            _ => None,
        }
    }

    pub fn message(&self) -> FlashMessage {
        match self {
            FlashKind::ContactSent => FlashMessage::new(FlashLevel::Success, SENT_MESSAGE),
            FlashKind::ContactFailed => FlashMessage::new(FlashLevel::Danger, FAILED_MESSAGE),
            FlashKind::ContactInvalid => {
                FlashMessage::new(FlashLevel::Danger, MISSING_FIELDS_MESSAGE)
            }
        }
    }
}

/// A one-shot message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
