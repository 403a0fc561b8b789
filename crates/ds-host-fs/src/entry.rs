use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::trace;

use ds_core::ports::{DirectoryEntryPort, EntryAccessError};
use ds_core::{EntryHandle, EntryKind, FileHandle};

use crate::file::{leaf_name, FsFile};

/// A node of a real directory tree.
pub struct FsEntry {
    path: PathBuf,
    kind: EntryKind,
}

impl FsEntry {
    /// Open a path as an entry, resolving its kind from filesystem metadata.
    /// Symlinks are followed; paths that are neither files nor directories
    /// are rejected.
    pub async fn open(path: impl Into<PathBuf>) -> Result<EntryHandle> {
        let path = path.into();
        let meta = tokio::fs::metadata(&path)
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else if meta.is_file() {
            EntryKind::File
        } else {
            bail!("{} is neither a file nor a directory", path.display());
        };

        Ok(EntryHandle::from_port(Self { path, kind }))
    }
}

#[async_trait]
impl DirectoryEntryPort for FsEntry {
    fn name(&self) -> String {
        leaf_name(&self.path)
    }

    fn kind(&self) -> EntryKind {
        self.kind
    }

    async fn file(&self) -> Result<FileHandle> {
        if self.kind.is_directory() {
            return Err(EntryAccessError::NotAFile(self.name()).into());
        }
        let meta = tokio::fs::metadata(&self.path)
            .await
            .with_context(|| format!("Failed to stat {}", self.path.display()))?;
        let file = FsFile::with_size(self.path.clone(), meta.len());
        Ok(FileHandle::new(Arc::new(file)))
    }

    async fn read_entries(&self) -> Result<Vec<EntryHandle>> {
        if self.kind.is_file() {
            return Err(EntryAccessError::NotADirectory(self.name()).into());
        }

        let mut dir = tokio::fs::read_dir(&self.path)
            .await
            .with_context(|| format!("Failed to list {}", self.path.display()))?;

        let mut children: Vec<EntryHandle> = Vec::new();
        while let Some(child) = dir
            .next_entry()
            .await
            .with_context(|| format!("Failed to list {}", self.path.display()))?
        {
            let path = child.path();
            let file_type = child
                .file_type()
                .await
                .with_context(|| format!("Failed to stat {}", path.display()))?;

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                // symlink or special file: resolve through metadata, skip
                // whatever does not land on a file or directory
                match tokio::fs::metadata(&path).await {
                    Ok(meta) if meta.is_dir() => EntryKind::Directory,
                    Ok(meta) if meta.is_file() => EntryKind::File,
                    _ => {
                        trace!(path = %path.display(), "skipping unsupported child");
                        continue;
                    }
                }
            };

            children.push(EntryHandle::from_port(FsEntry { path, kind }));
        }

        // read_dir order is platform-dependent; sort for a stable listing
        children.sort_by_key(|entry| entry.name());
        Ok(children)
    }
}
