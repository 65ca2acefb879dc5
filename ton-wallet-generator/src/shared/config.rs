//! Runtime configuration
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file, and fall back to the defaults in [`crate::shared::constants`].

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::AddressFormat;
use dotenv::dotenv;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Resolved generator configuration
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub addresses_file: String,
    pub confirm_threshold: u64,
    pub progress_interval: usize,
    pub address_format: AddressFormat,
    pub wallet_version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            addresses_file: DEFAULT_ADDRESSES_FILE.to_string(),
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            address_format: AddressFormat::default(),
            wallet_version: WALLET_VERSION.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from .env (if present) and the environment
    pub fn from_env() -> Result<Self, WalletError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_dir = lookup(ENV_OUTPUT_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let addresses_file = match lookup(ENV_ADDRESSES_FILE) {
            Some(name) => validate_file_name(ENV_ADDRESSES_FILE, name.trim())?,
            None => defaults.addresses_file,
        };

        let confirm_threshold = match lookup(ENV_CONFIRM_THRESHOLD) {
            Some(raw) => parse_positive::<u64>(ENV_CONFIRM_THRESHOLD, &raw)?,
            None => defaults.confirm_threshold,
        };

        let progress_interval = match lookup(ENV_PROGRESS_INTERVAL) {
            Some(raw) => parse_positive::<usize>(ENV_PROGRESS_INTERVAL, &raw)?,
            None => defaults.progress_interval,
        };

        let test_only = match lookup(ENV_TESTNET) {
            Some(raw) => parse_flag(ENV_TESTNET, &raw)?,
            None => defaults.address_format.test_only,
        };

        let bounceable = match lookup(ENV_BOUNCEABLE) {
            Some(raw) => parse_flag(ENV_BOUNCEABLE, &raw)?,
            None => defaults.address_format.bounceable,
        };

        Ok(Self {
            output_dir,
            addresses_file,
            confirm_threshold,
            progress_interval,
            address_format: AddressFormat::new(bounceable, test_only),
            wallet_version: defaults.wallet_version,
        })
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T, WalletError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| WalletError::config(format!("{} must be a positive integer, got '{}'", key, raw)))?;
    if value == T::default() {
        return Err(WalletError::config(format!("{} must be greater than zero", key)));
    }
    Ok(value)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, WalletError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WalletError::config(format!("{} must be a boolean, got '{}'", key, other))),
    }
}

fn validate_file_name(key: &str, name: &str) -> Result<String, WalletError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(WalletError::config(format!("{} must be a plain file name, got '{}'", key, name)));
    }
    Ok(name.to_string())
}
