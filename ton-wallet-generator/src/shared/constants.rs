//! Constants for the wallet generator
//!
//! This module contains all constants used throughout the wallet generator.

// Mnemonic constants
pub const MNEMONIC_WORD_COUNT: usize = 24;
pub const PBKDF_ITERATIONS: u32 = 100_000;
pub const SEED_VERSION_SALT: &[u8] = b"TON seed version";
pub const DEFAULT_SEED_SALT: &[u8] = b"TON default seed";
pub const SEED_SIZE: usize = 32;

// Key constants
pub const PUBLIC_KEY_SIZE: usize = 32;
pub const SECRET_KEY_SIZE: usize = 64;

// Wallet contract v4R2
pub const WALLET_VERSION: &str = "v4R2";
pub const WALLET_V4R2_CODE_HASH: &str =
    "feb5ff6820e2ff0d9483e7e0d62c817d846789fb4ae580c878866d959dabd5c0";
pub const WALLET_V4R2_CODE_DEPTH: u16 = 7;
pub const DEFAULT_SUBWALLET_ID: u32 = 698_983_191;
pub const BASECHAIN: i8 = 0;

// Address tags
pub const BOUNCEABLE_TAG: u8 = 0x11;
pub const NON_BOUNCEABLE_TAG: u8 = 0x51;
pub const TEST_ONLY_FLAG: u8 = 0x80;

// Driver constants
pub const DEFAULT_CONFIRM_THRESHOLD: u64 = 100;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10;

// Output constants
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_ADDRESSES_FILE: &str = "wallet.txt";
pub const DETAILS_FILE_PREFIX: &str = "wallets_details_";
pub const DETAILS_FILE_EXTENSION: &str = "txt";
pub const STAGING_SUFFIX: &str = ".partial";
pub const SEPARATOR_WIDTH: usize = 50;

// Environment keys
pub const ENV_OUTPUT_DIR: &str = "TON_WALLETGEN_OUTPUT_DIR";
pub const ENV_ADDRESSES_FILE: &str = "TON_WALLETGEN_ADDRESSES_FILE";
pub const ENV_CONFIRM_THRESHOLD: &str = "TON_WALLETGEN_CONFIRM_THRESHOLD";
pub const ENV_PROGRESS_INTERVAL: &str = "TON_WALLETGEN_PROGRESS_INTERVAL";
pub const ENV_TESTNET: &str = "TON_WALLETGEN_TESTNET";
pub const ENV_BOUNCEABLE: &str = "TON_WALLETGEN_BOUNCEABLE";
