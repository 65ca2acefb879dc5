//! Platform-specific implementations
//!
//! File-backed artifact storage. Artifacts are staged next to their final
//! location and renamed into place, so readers never see a half-written file
//! and a failed run leaves no partial output behind.

use crate::domain::repositories::{Artifact, ArtifactRepository};
use crate::shared::constants::STAGING_SUFFIX;
use crate::shared::error::WalletError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory-backed artifact storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn final_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn staging_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!(".{}{}", name, STAGING_SUFFIX))
    }

    async fn stage(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, WalletError> {
        let mut staged = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.staging_path(&artifact.name);
            if let Err(e) = write_private(&path, artifact.contents.as_bytes()).await {
                remove_quietly(&path).await;
                discard(&staged).await;
                return Err(WalletError::persistence(format!(
                    "Failed to stage {}: {}",
                    artifact.name, e
                )));
            }
            staged.push(path);
        }
        Ok(staged)
    }
}

#[async_trait]
impl ArtifactRepository for FileStorage {
    async fn publish(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, WalletError> {
        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            WalletError::persistence(format!(
                "Failed to create output directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;

        let staged = self.stage(artifacts).await?;

        let mut published: Vec<PathBuf> = Vec::with_capacity(artifacts.len());
        for (i, artifact) in artifacts.iter().enumerate() {
            let target = self.final_path(&artifact.name);
            if let Err(e) = fs::rename(&staged[i], &target).await {
                log::warn!(
                    "Publishing {} failed, rolling back {} file(s)",
                    artifact.name,
                    published.len()
                );
                discard(&published).await;
                discard(&staged[i..]).await;
                return Err(WalletError::persistence(format!(
                    "Failed to write {}: {}",
                    target.display(),
                    e
                )));
            }
            log::debug!("Published {}", target.display());
            published.push(target);
        }

        Ok(published)
    }
}

// Output holds secret keys: owner-only on unix
async fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents).await?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    }
    Ok(())
}

async fn discard(paths: &[PathBuf]) {
    for path in paths {
        remove_quietly(path).await;
    }
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}
