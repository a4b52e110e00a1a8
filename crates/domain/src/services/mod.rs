//! Domain services for the portfolio.
//!
//! Services contain business logic that operates on domain models.

pub mod contact;
pub mod notification;

pub use contact::{submit_contact, ContactOutcome, FailureFeedback};
pub use notification::{
    ContactNotifier, DeliveryError, DispatchOutcome, MailTransport, OutgoingMail,
    RecordingMailTransport,
};
