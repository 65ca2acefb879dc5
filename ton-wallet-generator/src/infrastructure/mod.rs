//! Infrastructure layer - platform-specific implementations
//!
//! This module contains the file-backed artifact storage and the terminal
//! console used by the binary.

pub mod platform;
pub mod terminal;

// Re-export infrastructure components
pub use platform::*;
pub use terminal::*;
