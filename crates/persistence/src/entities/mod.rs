//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;

pub use project::ProjectEntity;
pub use service::ServiceEntity;
pub use skill::SkillEntity;
pub use testimonial::TestimonialEntity;
