//! Shared types, utilities, and constants
//!
//! This module contains common types, configuration, utilities, and constants
//! used throughout the wallet generator.

pub mod types;
pub mod utils;
pub mod constants;
pub mod config;
pub mod error;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use constants::*;
pub use config::*;
pub use error::*;
