//! Wallet record entity
//!
//! One generated wallet: mnemonic, address and hex-encoded keys, all derived
//! from the same seed.

use crate::shared::types::{Address, HexKey};
use zeroize::Zeroize;

/// Generated wallet, immutable once built
/// Does not implement Debug, Clone, Serialize, or Deserialize to prevent sensitive data exposure
pub struct WalletRecord {
    mnemonic: Vec<String>,
    address: Address,
    public_key: HexKey,
    secret_key: HexKey,
}

impl WalletRecord {
    pub fn new(mnemonic: Vec<String>, address: Address, public_key: HexKey, secret_key: HexKey) -> Self {
        Self {
            mnemonic,
            address,
            public_key,
            secret_key,
        }
    }

    pub fn mnemonic_words(&self) -> &[String] {
        &self.mnemonic
    }

    /// Mnemonic words space-joined, as written to the details file
    pub fn mnemonic(&self) -> String {
        self.mnemonic.join(" ")
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Details-file block for this wallet at 1-based position `index`
    pub fn render_block(&self, index: usize, separator: &str) -> String {
        format!(
            "Wallet #{}\nAddress: {}\nMnemonic: {}\nPublic Key: {}\nSecret Key: {}\n{}\n",
            index,
            self.address,
            self.mnemonic(),
            self.public_key,
            self.secret_key,
            separator
        )
    }
}

impl Drop for WalletRecord {
    fn drop(&mut self) {
        self.mnemonic.zeroize();
        self.secret_key.zeroize();
    }
}
