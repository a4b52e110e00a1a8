//! Domain models for the portfolio.

pub mod contact;
pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;

pub use contact::{ContactNotification, ContactSubmission, FlashKind, FlashLevel, FlashMessage};
pub use project::{NewProject, Project};
pub use service::{NewService, Service};
pub use skill::{NewSkill, Skill};
pub use testimonial::{NewTestimonial, Testimonial};
