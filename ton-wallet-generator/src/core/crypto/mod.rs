//! Cryptographic functionality for the wallet generator
//!
//! This module provides the wallet SDK seam used by the generator and its
//! native TON implementation.
//!
//! SECURITY: secret material (mnemonic words, seeds, secret keys) lives in
//! zeroizing containers and is never logged.

pub mod address;
pub mod keys;

// Re-export all public items from submodules
pub use address::*;
pub use keys::*;

use crate::shared::constants::DEFAULT_SUBWALLET_ID;
use crate::shared::error::WalletError;
use crate::shared::types::AddressFormat;
use async_trait::async_trait;
use zeroize::Zeroizing;

/// Raw keypair as handed back by a wallet SDK
pub struct KeyPairBytes {
    pub public_key: Vec<u8>,
    pub secret_key: Zeroizing<Vec<u8>>,
}

/// Wallet SDK capabilities the generator depends on
#[async_trait]
pub trait WalletSdk: Send + Sync {
    /// Generate a fresh mnemonic, words in order
    async fn generate_mnemonic(&self) -> Result<Vec<String>, WalletError>;

    /// Derive the seed and keypair for a mnemonic
    async fn derive_key_pair(&self, words: &[String]) -> Result<KeyPairBytes, WalletError>;

    /// Derive the user-friendly wallet address for a public key
    async fn derive_address(&self, public_key: &[u8]) -> Result<String, WalletError>;
}

/// Native TON implementation of [`WalletSdk`] for wallet contract v4R2
///
/// PBKDF2 work runs on the blocking pool so the runtime thread stays free.
#[derive(Debug, Clone, Copy)]
pub struct TonSdk {
    key_manager: KeyManager,
}

impl TonSdk {
    pub fn new(address_format: AddressFormat) -> Self {
        Self::with_subwallet(address_format, DEFAULT_SUBWALLET_ID)
    }

    pub fn with_subwallet(address_format: AddressFormat, subwallet_id: u32) -> Self {
        Self {
            key_manager: KeyManager::new(address_format, subwallet_id),
        }
    }
}

impl Default for TonSdk {
    fn default() -> Self {
        Self::new(AddressFormat::default())
    }
}

#[async_trait]
impl WalletSdk for TonSdk {
    async fn generate_mnemonic(&self) -> Result<Vec<String>, WalletError> {
        let key_manager = self.key_manager;
        let phrase = tokio::task::spawn_blocking(move || key_manager.generate_seed_phrase()).await??;
        Ok(phrase.words().to_vec())
    }

    async fn derive_key_pair(&self, words: &[String]) -> Result<KeyPairBytes, WalletError> {
        let key_manager = self.key_manager;
        let phrase = SecureSeedPhrase::new(words.to_vec());
        let pair = tokio::task::spawn_blocking(move || key_manager.derive_key_pair(&phrase)).await??;
        Ok(KeyPairBytes {
            public_key: pair.public_key().to_vec(),
            secret_key: Zeroizing::new(pair.secret_key().to_vec()),
        })
    }

    async fn derive_address(&self, public_key: &[u8]) -> Result<String, WalletError> {
        self.key_manager.get_address(public_key)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_PHRASE: &str = "harbor just mean olive pride road slender sweet ugly wise art brush \
        collect digital exact gadget humor legal more parent rack science spend ticket";

    #[tokio::test]
    async fn test_ton_sdk_known_answer() {
        let sdk = TonSdk::default();
        let words: Vec<String> = KNOWN_PHRASE.split_whitespace().map(String::from).collect();

        let pair = sdk.derive_key_pair(&words).await.expect("Failed to derive keypair");
        assert_eq!(
            hex::encode(&pair.public_key),
            "24a4a2d374857104efa476b1d39cfd78969fcd50d0b70f84ac24ee1300552a40"
        );
        assert_eq!(pair.secret_key.len(), 64);

        let address = sdk.derive_address(&pair.public_key).await.expect("Failed to derive address");
        assert_eq!(address, "EQBRJhtp4kzRizCXUhmE4U8wlqY08rCf/GDWVnquOY0Aa31s");
    }

    #[tokio::test]
    async fn test_ton_sdk_testnet_format() {
        let sdk = TonSdk::new(AddressFormat::new(true, true));
        let public_key = hex::decode("24a4a2d374857104efa476b1d39cfd78969fcd50d0b70f84ac24ee1300552a40")
            .expect("Failed to decode key");
        let address = sdk.derive_address(&public_key).await.expect("Failed to derive address");
        assert!(address.starts_with("kQ"));
    }

    #[tokio::test]
    async fn test_ton_sdk_generates_valid_mnemonic() {
        let sdk = TonSdk::default();
        let words = sdk.generate_mnemonic().await.expect("Failed to generate mnemonic");
        assert_eq!(words.len(), 24);
        assert!(keys::mnemonic::validate_mnemonic(&words).is_ok());
    }
}
