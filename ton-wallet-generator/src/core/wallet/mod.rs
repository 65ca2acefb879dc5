//! Single wallet generation
//!
//! This module turns one round of SDK calls into a [`WalletRecord`].

use crate::core::crypto::WalletSdk;
use crate::domain::WalletRecord;
use crate::shared::error::WalletError;
use crate::shared::utils::normalize_address;

/// Generates one wallet record per call
pub struct WalletGenerator<'a> {
    sdk: &'a dyn WalletSdk,
}

impl<'a> WalletGenerator<'a> {
    pub fn new(sdk: &'a dyn WalletSdk) -> Self {
        Self { sdk }
    }

    /// Generate a brand new wallet
    pub async fn generate_wallet(&self) -> Result<WalletRecord, WalletError> {
        let words = self.sdk.generate_mnemonic().await.map_err(wrap)?;
        self.build_record(words).await
    }

    /// Rebuild the record for an existing mnemonic
    pub async fn restore_wallet(&self, words: &[String]) -> Result<WalletRecord, WalletError> {
        self.build_record(words.to_vec()).await
    }

    async fn build_record(&self, words: Vec<String>) -> Result<WalletRecord, WalletError> {
        let key_pair = self.sdk.derive_key_pair(&words).await.map_err(wrap)?;
        let address = self
            .sdk
            .derive_address(&key_pair.public_key)
            .await
            .map_err(wrap)?;

        Ok(WalletRecord::new(
            words,
            normalize_address(&address),
            hex::encode(&key_pair.public_key),
            hex::encode(&key_pair.secret_key[..]),
        ))
    }
}

// Every SDK failure surfaces as a generation error
fn wrap(err: WalletError) -> WalletError {
    match err {
        WalletError::Generation(_) => err,
        other => WalletError::generation(other.to_string()),
    }
}
