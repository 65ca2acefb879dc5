//! Key generation and derivation
//!
//! This module ties the mnemonic scheme, the Ed25519 keypair and the wallet
//! address together. Everything here is synchronous and CPU bound.

use super::{mnemonic, SecureKeyPair, SecureSeedPhrase};
use crate::core::crypto::address::TonAddress;
use crate::shared::error::WalletError;
use crate::shared::types::AddressFormat;
use rand::rngs::OsRng;

/// Key manager for a single wallet contract flavour
#[derive(Debug, Clone, Copy)]
pub struct KeyManager {
    address_format: AddressFormat,
    subwallet_id: u32,
}

impl KeyManager {
    pub fn new(address_format: AddressFormat, subwallet_id: u32) -> Self {
        Self {
            address_format,
            subwallet_id,
        }
    }

    /// Generate a new seed phrase from OS randomness
    pub fn generate_seed_phrase(&self) -> Result<SecureSeedPhrase, WalletError> {
        let words = mnemonic::generate_mnemonic(&mut OsRng)?;
        Ok(SecureSeedPhrase::new(words))
    }

    /// Derive the keypair behind a seed phrase
    pub fn derive_key_pair(&self, seed_phrase: &SecureSeedPhrase) -> Result<SecureKeyPair, WalletError> {
        mnemonic::validate_mnemonic(seed_phrase.words())?;
        let seed = mnemonic::mnemonic_to_seed(seed_phrase.words())?;
        SecureKeyPair::from_seed(&seed[..])
    }

    /// User-friendly address (standard base64 alphabet) of the wallet owned by `public_key`
    pub fn get_address(&self, public_key: &[u8]) -> Result<String, WalletError> {
        let address = TonAddress::wallet_v4r2(public_key, self.subwallet_id)?;
        Ok(address.to_user_friendly(self.address_format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::DEFAULT_SUBWALLET_ID;

    const KNOWN_PHRASE: &str = "harbor just mean olive pride road slender sweet ugly wise art brush \
        collect digital exact gadget humor legal more parent rack science spend ticket";

    fn manager() -> KeyManager {
        KeyManager::new(AddressFormat::default(), DEFAULT_SUBWALLET_ID)
    }

    #[test]
    fn test_known_phrase_derivation() {
        let manager = manager();
        let phrase = SecureSeedPhrase::from_phrase(KNOWN_PHRASE);
        let pair = manager.derive_key_pair(&phrase).expect("Failed to derive keypair");
        assert_eq!(
            pair.public_key_hex(),
            "24a4a2d374857104efa476b1d39cfd78969fcd50d0b70f84ac24ee1300552a40"
        );

        let address = manager.get_address(pair.public_key()).expect("Failed to derive address");
        assert_eq!(address, "EQBRJhtp4kzRizCXUhmE4U8wlqY08rCf/GDWVnquOY0Aa31s");
    }

    #[test]
    fn test_generated_phrase_round_trip() {
        let manager = manager();
        let phrase = manager.generate_seed_phrase().expect("Failed to generate seed phrase");
        let first = manager.derive_key_pair(&phrase).expect("Failed to derive keypair");

        let restored = SecureSeedPhrase::from_phrase(&phrase.phrase());
        let second = manager.derive_key_pair(&restored).expect("Failed to derive keypair");
        assert_eq!(first.public_key(), second.public_key());
        assert_eq!(first.secret_key(), second.secret_key());
    }

    #[test]
    fn test_invalid_phrase_is_rejected() {
        let phrase = SecureSeedPhrase::from_phrase("abandon abandon abandon");
        assert!(manager().derive_key_pair(&phrase).is_err());
    }
}
