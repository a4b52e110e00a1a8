//! Contact form submission flow.

use serde::Deserialize;

use crate::models::contact::{ContactForm, ContactSubmission, ContactValidationError, FlashKind};
use crate::services::notification::{ContactNotifier, DispatchOutcome};

/// What the visitor is told when delivery of their message fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureFeedback {
    /// Show the success message regardless of the dispatch outcome.
    #[default]
    ReportSuccess,
    /// Show an error message when the message was not delivered.
    ReportFailure,
}

impl FailureFeedback {
    /// Picks the flash for a dispatch outcome.
    pub fn flash_for(&self, outcome: &DispatchOutcome) -> FlashKind {
        match (self, outcome.is_delivered()) {
            (_, true) | (FailureFeedback::ReportSuccess, false) => FlashKind::ContactSent,
            (FailureFeedback::ReportFailure, false) => FlashKind::ContactFailed,
        }
    }
}

/// Result of an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOutcome {
    pub dispatch: DispatchOutcome,
    pub flash: FlashKind,
}

impl ContactOutcome {
    pub fn delivered(&self) -> bool {
        self.dispatch.is_delivered()
    }
}

/// Validates a contact form and dispatches the notification.
///
/// A form with any blank field is rejected before the notifier is touched.
pub async fn submit_contact(
    notifier: &dyn ContactNotifier,
    feedback: FailureFeedback,
    form: ContactForm,
) -> Result<ContactOutcome, ContactValidationError> {
    let submission = ContactSubmission::try_from(form)?;
    let dispatch = notifier.dispatch(&submission).await;
    let flash = feedback.flash_for(&dispatch);

    tracing::info!(
        outcome = dispatch.as_str(),
        flash = flash.as_str(),
        "Contact submission processed"
    );

    Ok(ContactOutcome { dispatch, flash })
}
