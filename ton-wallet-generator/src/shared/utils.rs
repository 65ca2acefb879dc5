//! Utility functions for the wallet generator
//!
//! This module contains common utility functions used throughout the wallet generator.

use chrono::{DateTime, SecondsFormat, Utc};

/// Rewrite a standard base64 address into the URL-safe alphabet
pub fn normalize_address(address: &str) -> String {
    address.replace('+', "-").replace('/', "_")
}

/// ISO-8601 timestamp safe for use inside a file name
///
/// `2024-05-01T10:20:30.123Z` becomes `2024-05-01T10-20-30-123Z`.
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Parse the leading integer of an operator answer
///
/// Surrounding whitespace is ignored, an optional sign is accepted and any
/// trailing non-digit text is dropped (`"12abc"` reads as 12). Returns `None`
/// when no digits lead the input or the value overflows.
pub fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
