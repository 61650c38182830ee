//! Two-phase file writes for uploaded images.
//!
//! A [`StagedFile`] moves through a small state machine:
//!
//! ```text
//! stage()   -> Staged      bytes written + fsynced to a hidden temp file
//! commit()  -> Committed   any existing file moved aside, temp renamed onto the final path
//! confirm() -> Confirmed   the moved-aside file is discarded
//! rollback  -> RolledBack  temp (or promoted) file removed, moved-aside file restored
//! ```
//!
//! Callers stage every file first, perform their database writes, commit the
//! files, and confirm them once the transaction has committed. Until then a
//! rollback puts the destination back exactly as it was, including a file
//! that the commit replaced. Dropping an unconfirmed file does the same.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::CoreError;

/// Lifecycle state of a [`StagedFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Staged,
    Committed,
    Confirmed,
    RolledBack,
}

/// A file written next to its destination but not yet visible there.
#[derive(Debug)]
pub struct StagedFile {
    temp_path: PathBuf,
    backup_path: PathBuf,
    final_path: PathBuf,
    /// Set when `commit` moved a previous file out of the way.
    displaced: bool,
    state: StageState,
}

impl StagedFile {
    /// Create `dir` if needed and write `data` to a temp file inside it.
    ///
    /// `final_path` must be a child of `dir`; the rename in [`commit`](Self::commit)
    /// relies on both paths living on the same filesystem.
    pub async fn stage(dir: &Path, final_path: PathBuf, data: &[u8]) -> Result<Self, CoreError> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            tracing::error!(dir = %dir.display(), error = %e, "Failed to create image directory");
            CoreError::Storage("Failed to create directory".into())
        })?;

        let name = final_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let token = Uuid::new_v4();
        let temp_path = dir.join(format!(".{name}.{token}.tmp"));
        let backup_path = dir.join(format!(".{name}.{token}.bak"));

        if let Err(e) = write_synced(&temp_path, data).await {
            tracing::error!(path = %temp_path.display(), error = %e, "Failed to write staged file");
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(CoreError::Storage("Failed to save file".into()));
        }

        Ok(Self {
            temp_path,
            backup_path,
            final_path,
            displaced: false,
            state: StageState::Staged,
        })
    }

    pub fn state(&self) -> StageState {
        self.state
    }

    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Atomically move the staged bytes onto the final path.
    ///
    /// An existing regular file at the final path is moved aside first and
    /// kept until [`confirm`](Self::confirm) or [`rollback`](Self::rollback).
    pub async fn commit(&mut self) -> Result<(), CoreError> {
        if self.state != StageState::Staged {
            return Err(CoreError::Internal(format!(
                "Cannot commit a file in state {:?}",
                self.state
            )));
        }

        let occupied = tokio::fs::symlink_metadata(&self.final_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if occupied {
            tokio::fs::rename(&self.final_path, &self.backup_path)
                .await
                .map_err(|e| {
                    tracing::error!(
                        path = %self.final_path.display(),
                        error = %e,
                        "Failed to move existing file aside"
                    );
                    CoreError::Storage("Failed to save file".into())
                })?;
            self.displaced = true;
        }

        if let Err(e) = tokio::fs::rename(&self.temp_path, &self.final_path).await {
            tracing::error!(
                from = %self.temp_path.display(),
                to = %self.final_path.display(),
                error = %e,
                "Failed to promote staged file"
            );
            self.restore_displaced().await;
            return Err(CoreError::Storage("Failed to save file".into()));
        }

        self.state = StageState::Committed;
        Ok(())
    }

    /// Make a committed write permanent by discarding the file it replaced.
    pub async fn confirm(&mut self) {
        if self.state != StageState::Committed {
            return;
        }
        if self.displaced {
            if let Err(e) = tokio::fs::remove_file(&self.backup_path).await {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.backup_path.display(),
                        error = %e,
                        "Could not remove replaced file"
                    );
                }
            }
            self.displaced = false;
        }
        self.state = StageState::Confirmed;
    }

    /// Undo the write.
    ///
    /// A `Staged` file loses its temp file. A `Committed` file is removed from
    /// the final path and whatever it replaced is moved back. Confirmed files
    /// are left alone. Errors are logged, not returned: rollback runs on paths
    /// that are already failing.
    pub async fn rollback(&mut self) {
        let target = match self.state {
            StageState::Staged => &self.temp_path,
            StageState::Committed => &self.final_path,
            StageState::Confirmed | StageState::RolledBack => return,
        };

        if let Err(e) = tokio::fs::remove_file(target).await {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %target.display(), error = %e, "Rollback could not remove file");
            }
        }
        self.restore_displaced().await;

        self.state = StageState::RolledBack;
    }

    async fn restore_displaced(&mut self) {
        if !self.displaced {
            return;
        }
        if let Err(e) = tokio::fs::rename(&self.backup_path, &self.final_path).await {
            tracing::error!(
                path = %self.final_path.display(),
                backup = %self.backup_path.display(),
                error = %e,
                "Failed to restore replaced file"
            );
        }
        self.displaced = false;
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match self.state {
            StageState::Staged => {
                let _ = std::fs::remove_file(&self.temp_path);
            }
            StageState::Committed => {
                let _ = std::fs::remove_file(&self.final_path);
                if self.displaced {
                    let _ = std::fs::rename(&self.backup_path, &self.final_path);
                }
            }
            StageState::Confirmed | StageState::RolledBack => {}
        }
    }
}

/// Roll back every file in `files`.
pub async fn rollback_all(files: &mut [StagedFile]) {
    for file in files.iter_mut() {
        file.rollback().await;
    }
}

/// Remove `path` if it exists. Returns `true` when a file was removed.
pub async fn remove_file_if_exists(path: &Path) -> Result<bool, CoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to remove file");
            Err(CoreError::Storage("Failed to remove old image".into()))
        }
    }
}

async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}
