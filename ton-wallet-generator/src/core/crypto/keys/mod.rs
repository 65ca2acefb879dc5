//! Key management for the wallet generator
//!
//! This module handles mnemonic generation, seed derivation and the Ed25519 keypair.

pub mod mnemonic;
pub mod secure_key_pair;
pub mod key_manager;
pub mod secure_seed_phrase;

// Re-export all public items from submodules
pub use secure_key_pair::*;
pub use key_manager::*;
pub use secure_seed_phrase::*;
