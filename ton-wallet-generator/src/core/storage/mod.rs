//! Run output storage
//!
//! This module names the two artifacts of a run and hands them to an
//! [`ArtifactRepository`] as one all-or-nothing unit.

use crate::domain::repositories::{Artifact, ArtifactRepository};
use crate::domain::BulkRun;
use crate::shared::constants::{DETAILS_FILE_EXTENSION, DETAILS_FILE_PREFIX};
use crate::shared::error::WalletError;
use crate::shared::utils::file_timestamp;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Where a run's artifacts ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRun {
    pub details_path: PathBuf,
    pub addresses_path: PathBuf,
}

/// Output storage manager
pub struct OutputStorage<'a> {
    repository: &'a dyn ArtifactRepository,
    addresses_file: String,
}

impl<'a> OutputStorage<'a> {
    pub fn new(repository: &'a dyn ArtifactRepository, addresses_file: impl Into<String>) -> Self {
        Self {
            repository,
            addresses_file: addresses_file.into(),
        }
    }

    /// Render and persist both artifacts of `run`
    ///
    /// The timestamped details file goes first; the fixed-name addresses
    /// file, which replaces the previous run's copy, goes last.
    pub async fn persist_run(&self, run: &BulkRun) -> Result<PersistedRun, WalletError> {
        let artifacts = [
            Artifact::new(details_file_name(run.started_at()), run.details_artifact()),
            Artifact::new(self.addresses_file.clone(), run.addresses_artifact()),
        ];

        let mut paths = self.repository.publish(&artifacts).await?.into_iter();
        match (paths.next(), paths.next()) {
            (Some(details_path), Some(addresses_path)) => Ok(PersistedRun {
                details_path,
                addresses_path,
            }),
            _ => Err(WalletError::internal("Repository returned fewer paths than artifacts")),
        }
    }
}

/// `wallets_details_<timestamp>.txt`
pub fn details_file_name(started_at: DateTime<Utc>) -> String {
    format!(
        "{}{}.{}",
        DETAILS_FILE_PREFIX,
        file_timestamp(started_at),
        DETAILS_FILE_EXTENSION
    )
}
