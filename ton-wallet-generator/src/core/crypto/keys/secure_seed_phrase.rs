use zeroize::Zeroize;

/// Secure mnemonic wrapper, cleared from memory when dropped
pub struct SecureSeedPhrase {
    words: Vec<String>,
}

impl SecureSeedPhrase {
    /// Create a new secure seed phrase from its words
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Split a space-separated phrase into words
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(phrase.split_whitespace().map(|s| s.to_string()).collect())
    }

    /// Get the words in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the phrase space-joined, as stored in the details file
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Drop for SecureSeedPhrase {
    fn drop(&mut self) {
        // Clear the words when dropped
        self.words.zeroize();
    }
}
