use crate::shared::constants::*;
use crate::shared::error::WalletError;
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Ed25519 keypair in the NaCl layout
///
/// The secret half is `seed || public_key` (64 bytes) and is zeroized on drop.
pub struct SecureKeyPair {
    public_key: [u8; PUBLIC_KEY_SIZE],
    secret_key: Zeroizing<[u8; SECRET_KEY_SIZE]>,
}

impl SecureKeyPair {
    /// Derive the keypair from a 32-byte seed
    pub fn from_seed(seed: &[u8]) -> Result<Self, WalletError> {
        let seed: &[u8; SEED_SIZE] = seed
            .try_into()
            .map_err(|_| WalletError::generation(format!("Invalid seed length: {}", seed.len())))?;

        let signing_key = SigningKey::from_bytes(seed);
        let public_key = signing_key.verifying_key().to_bytes();
        let secret_key = Zeroizing::new(signing_key.to_keypair_bytes());

        Ok(Self {
            public_key,
            secret_key,
        })
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    pub fn secret_key(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.secret_key
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    pub fn secret_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.secret_key[..]))
    }
}

// No Debug or Clone implementation to prevent key exposure
