//! Domain layer for the portfolio backend.
//!
//! This crate contains:
//! - Domain models (Project, Service, Skill, Testimonial, contact submissions)
//! - The contact submission flow and mail transport abstraction

pub mod models;
pub mod services;
