//! HTTP route handlers.

pub mod contact;
pub mod health;
pub mod portfolio;
pub mod testimonials;
