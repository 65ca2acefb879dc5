//! Bulk run entity
//!
//! The ordered records of one invocation and the two text artifacts
//! rendered from them. Both artifacts walk the same vector, so their order
//! always agrees.

use super::wallet::WalletRecord;
use crate::shared::constants::SEPARATOR_WIDTH;
use chrono::{DateTime, Utc};

pub const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Records accumulated during one bulk invocation
pub struct BulkRun {
    started_at: DateTime<Utc>,
    records: Vec<WalletRecord>,
}

impl BulkRun {
    /// `expected` only sizes the first allocation, capped at
    /// [`MAX_PREALLOCATED_RECORDS`]
    pub fn new(started_at: DateTime<Utc>, expected: usize) -> Self {
        Self {
            started_at,
            records: Vec::with_capacity(expected.min(MAX_PREALLOCATED_RECORDS)),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn push(&mut self, record: WalletRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WalletRecord] {
        &self.records
    }

    /// Full report: one block per wallet, blank line between blocks
    pub fn details_artifact(&self) -> String {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| record.render_block(i + 1, &separator))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Addresses only, one per line, no trailing newline
    pub fn addresses_artifact(&self) -> String {
        self.records
            .iter()
            .map(|record| record.address())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
