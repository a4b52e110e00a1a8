//! Contact notification delivery.
//!
//! Provides the mail transport abstraction the dispatcher delivers through,
//! plus an in-memory transport for development and testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ContactSubmission;

/// Errors raised by a mail transport.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Invalid mailbox: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// A fully addressed email ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub from_name: Option<String>,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub body_html: String,
}

/// Capability to deliver one email over one session.
///
/// Implementations open and close their own session per call.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), DeliveryError>;
}

/// Result of a single dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The transport accepted the message.
    Delivered,
    /// No credential is configured; nothing was sent.
    DryRun,
    /// The single delivery attempt failed.
    Failed(String),
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered)
    }

    /// Label used for metrics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Delivered => "delivered",
            DispatchOutcome::DryRun => "dry_run",
            DispatchOutcome::Failed(_) => "failed",
        }
    }
}

/// Sends the contact notification for a validated submission.
///
/// Implementations never fail: every error is absorbed into the outcome.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn dispatch(&self, submission: &ContactSubmission) -> DispatchOutcome;

    /// Dispatches and reports only whether the message was delivered.
    async fn send_contact_notification(&self, submission: &ContactSubmission) -> bool {
        self.dispatch(submission).await.is_delivered()
    }
}

/// In-memory transport that records delivered mail.
///
/// Clones share the same mailbox so a test can keep a handle after handing
/// the transport to a service.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailTransport {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    attempts: Arc<Mutex<usize>>,
    /// Whether to simulate failures for testing.
    pub simulate_failure: bool,
}

impl RecordingMailTransport {
    /// Create a transport that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that rejects every message.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Messages accepted so far.
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Number of delivery attempts, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.lock().map(|a| *a).unwrap_or_default()
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), DeliveryError> {
        if let Ok(mut attempts) = self.attempts.lock() {
            *attempts += 1;
        }

        if self.simulate_failure {
            tracing::warn!(
                to = %mail.to,
                subject = %mail.subject,
                "Recording transport simulating failure"
            );
            return Err(DeliveryError::Transport("Simulated failure".to_string()));
        }

        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            "Recording transport accepted message"
        );

        self.sent
            .lock()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .push(mail.clone());
        Ok(())
    }
}
