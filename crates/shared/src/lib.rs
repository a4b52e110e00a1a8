//! Shared utilities for the portfolio backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic
//! - HTML escaping for outgoing notification bodies

pub mod html;
pub mod validation;
