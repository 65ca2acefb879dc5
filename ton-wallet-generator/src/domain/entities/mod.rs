//! Domain entities and value objects
//!
//! This module contains the entities produced by a generation run.

pub mod wallet;
pub mod bulk_run;

// Re-export entities
pub use wallet::*;
pub use bulk_run::*;
