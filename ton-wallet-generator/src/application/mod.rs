//! Application layer - use cases and ports
//!
//! This module contains the interactive session that drives the bulk
//! generator and the console port it reads from.

pub mod use_cases;
pub mod ports;

// Re-export application components
pub use use_cases::*;
pub use ports::*;
