//! Application ports
//!
//! This module contains the traits the use cases talk to the outside
//! world through.

use crate::shared::error::WalletError;
use async_trait::async_trait;

/// Line-oriented operator console
#[async_trait]
pub trait Console: Send + Sync {
    /// Show `prompt` and read one line
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    async fn ask(&self, prompt: &str) -> Result<Option<String>, WalletError>;

    /// Print one line of output
    fn say(&self, line: &str);
}
