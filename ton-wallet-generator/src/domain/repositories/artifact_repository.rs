//! Artifact repository for run output
//!
//! This module defines how rendered text artifacts are persisted.

use crate::shared::error::WalletError;
use async_trait::async_trait;
use std::path::PathBuf;

/// A named text file produced by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Artifact repository trait
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Persist every artifact or none of them
    ///
    /// Artifacts are made visible in slice order. On failure, artifacts
    /// already made visible by this call are removed again, so an artifact
    /// that replaces an existing file belongs at the end of the slice.
    /// Returns the final paths in the same order.
    async fn publish(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, WalletError>;
}
