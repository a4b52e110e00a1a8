//! Repository implementations for database operations.

pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;

pub use project::ProjectRepository;
pub use service::ServiceRepository;
pub use skill::SkillRepository;
pub use testimonial::TestimonialRepository;
