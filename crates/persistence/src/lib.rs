//! Persistence layer for the portfolio backend.
//!
//! This crate contains:
//! - Database connection management
//! - Schema creation and first-run seeding
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod init;
pub mod metrics;
pub mod repositories;
pub mod schema;
pub mod seed;

pub use init::{initialize, InitError, InitReport};
