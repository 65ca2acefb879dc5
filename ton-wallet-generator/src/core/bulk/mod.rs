//! Bulk wallet generation
//!
//! Runs the single wallet generator `count` times in order, reports
//! progress on stdout and persists the run's two artifacts only after every
//! wallet has been generated.

use crate::core::storage::OutputStorage;
use crate::core::wallet::WalletGenerator;
use crate::domain::BulkRun;
use crate::shared::constants::DEFAULT_PROGRESS_INTERVAL;
use crate::shared::error::WalletError;
use chrono::Utc;
use std::path::PathBuf;

/// Printed after the last artifact is in place, set off by a blank line
pub const COMPLETED_MESSAGE: &str = "\nGeneration completed successfully!";

/// Result of a completed bulk run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub generated: usize,
    pub details_path: PathBuf,
    pub addresses_path: PathBuf,
}

/// Bulk generation orchestrator
pub struct BulkGenerator<'a> {
    generator: WalletGenerator<'a>,
    storage: OutputStorage<'a>,
    progress_interval: usize,
}

impl<'a> BulkGenerator<'a> {
    pub fn new(generator: WalletGenerator<'a>, storage: OutputStorage<'a>) -> Self {
        Self {
            generator,
            storage,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Generate `count` wallets and write both artifacts
    ///
    /// Nothing is written unless every wallet was generated; the first
    /// generation failure discards the batch and is returned as is.
    pub async fn generate_bulk(&self, count: usize) -> Result<BulkOutcome, WalletError> {
        if count == 0 {
            return Err(WalletError::InvalidCount(count));
        }

        println!("{}", start_message(count));
        log::info!("Starting bulk generation of {} wallet(s)", count);

        let mut run = BulkRun::new(Utc::now(), count);
        for done in 1..=count {
            let record = self.generator.generate_wallet().await.map_err(|e| {
                log::error!("Wallet {}/{} failed, discarding batch", done, count);
                e
            })?;
            log::debug!("Generated wallet #{}: {}", done, record.address());
            run.push(record);

            if is_progress_point(done, count, self.progress_interval) {
                println!("Generated {}/{} wallet(s)", done, count);
            }
        }

        let persisted = self.storage.persist_run(&run).await?;
        log::info!(
            "Persisted {} wallet(s) to {} and {}",
            run.len(),
            persisted.details_path.display(),
            persisted.addresses_path.display()
        );

        println!("{}", COMPLETED_MESSAGE);
        println!("Full details saved to: {}", persisted.details_path.display());
        println!("Addresses only saved to: {}", persisted.addresses_path.display());

        Ok(BulkOutcome {
            generated: run.len(),
            details_path: persisted.details_path,
            addresses_path: persisted.addresses_path,
        })
    }
}

/// Batch header, set off from the prompts by a blank line
pub fn start_message(count: usize) -> String {
    format!("\nStarting generation of {} wallet(s)...", count)
}

/// Progress is reported every `interval` wallets and once at the end
pub fn is_progress_point(done: usize, count: usize, interval: usize) -> bool {
    done == count || (interval > 0 && done % interval == 0)
}
