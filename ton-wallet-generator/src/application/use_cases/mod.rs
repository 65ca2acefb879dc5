//! Application use cases
//!
//! This module contains the use cases that orchestrate the core and
//! infrastructure layers.

pub mod interactive;

// Re-export use cases
pub use interactive::*;
