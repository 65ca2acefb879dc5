//! Domain repositories
//!
//! This module contains repository traits for persisting run output.

pub mod artifact_repository;

// Re-export repositories
pub use artifact_repository::*;
