//! Domain layer - entities and repositories
//!
//! This module contains the data produced by the generator and the
//! persistence seam it is written through.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
