//! Email service for contact notifications.
//!
//! Delivery goes through a [`MailTransport`]:
//! - `SmtpMailTransport`: STARTTLS submission via lettre (production)
//! - any other transport injected with [`EmailService::with_transport`] (tests)
//!
//! Without a configured credential the service runs dry: the notification is
//! logged and nothing is sent.

use async_trait::async_trait;
use domain::models::{ContactNotification, ContactSubmission};
use domain::services::{
    ContactNotifier, DeliveryError, DispatchOutcome, MailTransport, OutgoingMail,
};
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::EmailConfig;

/// SMTP transport. Each delivery opens, authenticates and closes its own session.
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    pub fn new(config: &EmailConfig, credential: &str) -> Result<Self, DeliveryError> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username().to_string(),
                credential.to_string(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self { mailer })
    }
}

fn parse_address(raw: &str) -> Result<Address, DeliveryError> {
    raw.parse::<Address>()
        .map_err(|e| DeliveryError::InvalidAddress(format!("{}: {}", raw, e)))
}

/// Builds the MIME message: plain text and HTML alternatives.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, DeliveryError> {
    let from = Mailbox::new(mail.from_name.clone(), parse_address(&mail.from)?);
    let to = Mailbox::new(None, parse_address(&mail.to)?);

    let mut builder = Message::builder().from(from).to(to).subject(&mail.subject);

    // The submitter's address is free text; a malformed one only loses Reply-To.
    if let Some(reply_to) = &mail.reply_to {
        match parse_address(reply_to) {
            Ok(address) => builder = builder.reply_to(Mailbox::new(None, address)),
            Err(e) => warn!(error = %e, "Skipping Reply-To header"),
        }
    }

    builder
        .multipart(MultiPart::alternative_plain_html(
            mail.body_text.clone(),
            mail.body_html.clone(),
        ))
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), DeliveryError> {
        let message = build_message(mail)?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Email service that notifies the site owner of contact submissions.
#[derive(Clone)]
pub struct EmailService {
    config: Arc<EmailConfig>,
    /// Present only when a credential is configured.
    transport: Option<Arc<dyn MailTransport>>,
}

impl EmailService {
    /// Creates the service, wiring an SMTP transport when a credential is set.
    pub fn new(config: EmailConfig) -> Result<Self, DeliveryError> {
        let transport = match config.credential() {
            Some(credential) => {
                Some(Arc::new(SmtpMailTransport::new(&config, credential)?) as Arc<dyn MailTransport>)
            }
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    /// Creates the service with a custom transport.
    ///
    /// The transport is still only used when `config` carries a credential.
    pub fn with_transport(config: EmailConfig, transport: Arc<dyn MailTransport>) -> Self {
        let transport = config.credential().map(|_| transport);
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Whether notifications are actually sent.
    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Addresses the notification: owner to owner, replies go to the visitor.
    pub fn build_mail(&self, submission: &ContactSubmission) -> OutgoingMail {
        let notification = ContactNotification::for_submission(submission);

        OutgoingMail {
            from: self.config.owner_address.clone(),
            from_name: Some(self.config.sender_name.clone()).filter(|n| !n.is_empty()),
            to: self.config.owner_address.clone(),
            reply_to: Some(submission.email().to_string()),
            subject: notification.subject,
            body_text: notification.body_text,
            body_html: notification.body_html,
        }
    }
}

fn record_outcome(outcome: &DispatchOutcome) {
    counter!("contact_notifications_total", "outcome" => outcome.as_str()).increment(1);
}

#[async_trait]
impl ContactNotifier for EmailService {
    async fn dispatch(&self, submission: &ContactSubmission) -> DispatchOutcome {
        let mail = self.build_mail(submission);

        let outcome = match &self.transport {
            None => {
                warn!(
                    to = %mail.to,
                    subject = %mail.subject,
                    body = %mail.body_text,
                    "Email credential not configured, contact notification not sent"
                );
                DispatchOutcome::DryRun
            }
            Some(transport) => {
                let limit = Duration::from_secs(self.config.timeout_secs);
                match tokio::time::timeout(limit, transport.deliver(&mail)).await {
                    Ok(Ok(())) => {
                        info!(subject = %mail.subject, "Contact notification sent");
                        DispatchOutcome::Delivered
                    }
                    Ok(Err(e)) => {
                        error!(error = %e, subject = %mail.subject, "Failed to send contact notification");
                        DispatchOutcome::Failed(e.to_string())
                    }
                    Err(_) => {
                        error!(
                            timeout_secs = self.config.timeout_secs,
                            subject = %mail.subject,
                            "Contact notification timed out"
                        );
                        DispatchOutcome::Failed(format!(
                            "timed out after {}s",
                            self.config.timeout_secs
                        ))
                    }
                }
            }
        };

        record_outcome(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::services::RecordingMailTransport;

    fn email_config(password: &str) -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: password.to_string(),
            owner_address: "owner@example.com".to_string(),
            sender_name: "Portfolio".to_string(),
            timeout_secs: 5,
            failure_feedback: Default::default(),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission::parse("Jane Doe", "jane@example.com", "Hello there").unwrap()
    }

    #[test]
    fn test_new_without_credential_is_unconfigured() {
        let service = EmailService::new(email_config("")).unwrap();
        assert!(!service.is_configured());
    }

    #[test]
    fn test_new_with_credential_builds_smtp_transport() {
        let service = EmailService::new(email_config("app-token")).unwrap();
        assert!(service.is_configured());
    }

    #[test]
    fn test_build_mail_addresses() {
        let service = EmailService::new(email_config("")).unwrap();
        let mail = service.build_mail(&submission());

        assert_eq!(mail.from, "owner@example.com");
        assert_eq!(mail.to, "owner@example.com");
        assert_eq!(mail.reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(mail.from_name.as_deref(), Some("Portfolio"));
        assert_eq!(mail.subject, "Portfolio Contact: Jane Doe");
        assert!(mail.body_text.contains("Hello there"));
    }

    #[tokio::test]
    async fn test_dispatch_without_credential_is_dry_run() {
        let transport = RecordingMailTransport::new();
        let service =
            EmailService::with_transport(email_config(""), Arc::new(transport.clone()));

        let outcome = service.dispatch(&submission()).await;

        assert_eq!(outcome, DispatchOutcome::DryRun);
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_delivers_once() {
        let transport = RecordingMailTransport::new();
        let service =
            EmailService::with_transport(email_config("secret"), Arc::new(transport.clone()));

        let outcome = service.dispatch(&submission()).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
        assert_eq!(transport.attempts(), 1);
        assert_eq!(transport.sent()[0].subject, "Portfolio Contact: Jane Doe");
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_absorbed() {
        let transport = RecordingMailTransport::failing();
        let service =
            EmailService::with_transport(email_config("secret"), Arc::new(transport.clone()));

        let outcome = service.dispatch(&submission()).await;

        assert!(matches!(outcome, DispatchOutcome::Failed(_)));
        assert!(!service.send_contact_notification(&submission()).await);
        // No retries: one attempt per dispatch.
        assert_eq!(transport.attempts(), 2);
    }

    /// Accepts the connection and never answers.
    struct StalledTransport;

    #[async_trait]
    impl MailTransport for StalledTransport {
        async fn deliver(&self, _mail: &OutgoingMail) -> Result<(), DeliveryError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_dispatch_stalled_transport_times_out() {
        let mut config = email_config("secret");
        config.timeout_secs = 1;
        let service = EmailService::with_transport(config, Arc::new(StalledTransport));

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            service.dispatch(&submission()),
        )
        .await
        .expect("dispatch should give up on its own");

        assert_eq!(outcome, DispatchOutcome::Failed("timed out after 1s".to_string()));
    }

    #[test]
    fn test_build_message_multipart() {
        let service = EmailService::new(email_config("")).unwrap();
        let mail = service.build_mail(&submission());

        let message = build_message(&mail).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Portfolio Contact: Jane Doe"));
        assert!(raw.contains("Reply-To: jane@example.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn test_build_message_skips_malformed_reply_to() {
        let mut mail = EmailService::new(email_config(""))
            .unwrap()
            .build_mail(&submission());
        mail.reply_to = Some("not an address".to_string());

        let message = build_message(&mail).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn test_build_message_rejects_bad_owner() {
        let mut mail = EmailService::new(email_config(""))
            .unwrap()
            .build_mail(&submission());
        mail.from = "nobody".to_string();

        assert!(matches!(
            build_message(&mail),
            Err(DeliveryError::InvalidAddress(_))
        ));
    }
}
