//! TON mnemonic scheme
//!
//! Words come from the BIP-39 English list but the checksum and seed
//! derivation are TON's own: the phrase is HMAC'd into entropy, and only
//! phrases whose entropy passes the "basic seed" PBKDF2 probe are issued.

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use bip39::Language;
use hmac::{Hmac, Mac};
use rand::{CryptoRng, Rng};
use sha2::Sha512;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

const BASIC_SEED_ITERATIONS: u32 = {
    let rounds = PBKDF_ITERATIONS / 256;
    if rounds == 0 { 1 } else { rounds }
};

/// Generate a fresh 24-word phrase that passes the basic seed check
pub fn generate_mnemonic<R: Rng + CryptoRng>(rng: &mut R) -> Result<Vec<String>, WalletError> {
    let word_list = Language::English.word_list();
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let words: Vec<String> = (0..MNEMONIC_WORD_COUNT)
            .map(|_| word_list[rng.gen_range(0..word_list.len())].to_string())
            .collect();

        let entropy = mnemonic_to_entropy(&words)?;
        if is_basic_seed(&entropy[..]) {
            log::trace!("Mnemonic accepted after {} attempt(s)", attempts);
            return Ok(words);
        }
    }
}

/// Check word count, vocabulary and the basic seed probe
pub fn validate_mnemonic(words: &[String]) -> Result<(), WalletError> {
    if words.len() != MNEMONIC_WORD_COUNT {
        return Err(WalletError::generation(format!(
            "Mnemonic must have {} words, got {}",
            MNEMONIC_WORD_COUNT,
            words.len()
        )));
    }

    if let Some(unknown) = words.iter().find(|w| Language::English.find_word(w.as_str()).is_none()) {
        return Err(WalletError::generation(format!("Unknown mnemonic word: {}", unknown)));
    }

    let entropy = mnemonic_to_entropy(words)?;
    if !is_basic_seed(&entropy[..]) {
        return Err(WalletError::generation("Mnemonic failed the seed version check"));
    }
    Ok(())
}

/// HMAC-SHA512 keyed by the phrase over an empty password
pub fn mnemonic_to_entropy(words: &[String]) -> Result<Zeroizing<[u8; 64]>, WalletError> {
    let phrase = Zeroizing::new(words.join(" "));
    let mut mac = HmacSha512::new_from_slice(phrase.as_bytes())
        .map_err(|e| WalletError::generation(format!("HMAC initialization failed: {}", e)))?;
    mac.update(b"");
    let mut entropy = Zeroizing::new([0u8; 64]);
    entropy.copy_from_slice(&mac.finalize().into_bytes());
    Ok(entropy)
}

/// 32-byte Ed25519 seed for the phrase
pub fn mnemonic_to_seed(words: &[String]) -> Result<Zeroizing<[u8; SEED_SIZE]>, WalletError> {
    let entropy = mnemonic_to_entropy(words)?;
    let mut derived = Zeroizing::new([0u8; 64]);
    pbkdf2::pbkdf2_hmac::<Sha512>(&entropy[..], DEFAULT_SEED_SALT, PBKDF_ITERATIONS, &mut derived[..]);

    let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
    seed.copy_from_slice(&derived[..SEED_SIZE]);
    Ok(seed)
}

fn is_basic_seed(entropy: &[u8]) -> bool {
    let mut probe = Zeroizing::new([0u8; 64]);
    pbkdf2::pbkdf2_hmac::<Sha512>(entropy, SEED_VERSION_SALT, BASIC_SEED_ITERATIONS, &mut probe[..]);
    probe[0] == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    const KNOWN_PHRASE: &str = "harbor just mean olive pride road slender sweet ugly wise art brush \
        collect digital exact gadget humor legal more parent rack science spend ticket";

    fn known_words() -> Vec<String> {
        KNOWN_PHRASE.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_basic_seed_iterations() {
        assert_eq!(BASIC_SEED_ITERATIONS, 390);
    }

    #[test]
    fn test_known_mnemonic_is_valid() {
        assert!(validate_mnemonic(&known_words()).is_ok());
    }

    #[test]
    fn test_known_mnemonic_seed() {
        let seed = mnemonic_to_seed(&known_words()).expect("Failed to derive seed");
        assert_eq!(
            hex::encode(&seed[..]),
            "4227894f240924f1701da4cb9f1d26dfce31ef0b2a1ee29bcab07885b42f0001"
        );
    }

    #[test]
    fn test_generated_mnemonic_validates() {
        let words = generate_mnemonic(&mut OsRng).expect("Failed to generate mnemonic");
        assert_eq!(words.len(), MNEMONIC_WORD_COUNT);
        assert!(validate_mnemonic(&words).is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut short = known_words();
        short.pop();
        assert!(validate_mnemonic(&short).is_err());

        let mut unknown = known_words();
        unknown[0] = "notaword".to_string();
        assert!(validate_mnemonic(&unknown).is_err());
    }
}
