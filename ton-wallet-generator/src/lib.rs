//! TON Wallet Generator
//!
//! Bulk generator for TON wallets (contract v4R2).
//! Each wallet is a 24-word mnemonic, its Ed25519 keypair and the
//! user-friendly address derived from them, all computed locally.
//!
//! ## Architecture
//!
//! - **Core**: mnemonic/key/address derivation, single and bulk generation, output storage
//! - **Domain**: wallet records, bulk runs and the artifact repository seam
//! - **Application**: the interactive session and its console port
//! - **Infrastructure**: file-backed storage and the terminal console
//! - **Shared**: configuration, constants, errors and utilities
//!
//! ## Security
//!
//! - Mnemonics, seeds and secret keys are zeroized on drop
//! - Secret material never reaches the logs
//! - Output files are created owner-only on unix
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ton_wallet_generator::{
//!     BulkGenerator, FileStorage, OutputStorage, TonSdk, WalletGenerator,
//! };
//!
//! # async fn run() -> Result<(), ton_wallet_generator::WalletError> {
//! let sdk = TonSdk::default();
//! let repository = FileStorage::new(".");
//! let bulk = BulkGenerator::new(
//!     WalletGenerator::new(&sdk),
//!     OutputStorage::new(&repository, "wallet.txt"),
//! );
//!
//! let outcome = bulk.generate_bulk(5).await?;
//! println!("{} wallets in {}", outcome.generated, outcome.details_path.display());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export specific components
pub use application::{run_session, Console, CountDecision, SessionOutcome};
pub use crate::core::bulk::{BulkGenerator, BulkOutcome};
pub use crate::core::crypto::{TonSdk, WalletSdk};
pub use crate::core::storage::OutputStorage;
pub use crate::core::wallet::WalletGenerator;
pub use domain::{ArtifactRepository, BulkRun, WalletRecord};
pub use infrastructure::{FileStorage, StdinConsole, TerminalConsole};

// Re-export shared types
pub use shared::config::GeneratorConfig;
pub use shared::error::WalletError;
pub use shared::types::AddressFormat;

/// Install the logger, `warn` unless `RUST_LOG` says otherwise
///
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
