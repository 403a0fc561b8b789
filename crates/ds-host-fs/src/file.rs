use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;

use ds_core::ports::FileBlobPort;
use ds_core::FileHandle;

/// A file on disk. Bytes are read lazily, on the first `read_bytes` call.
pub struct FsFile {
    path: PathBuf,
    size: Option<u64>,
}

impl FsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: None,
        }
    }

    /// A file whose size is already known from a directory listing.
    pub(crate) fn with_size(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size: Some(size),
        }
    }

    pub fn into_handle(self) -> FileHandle {
        FileHandle::from_port(self)
    }

    pub fn handle(path: impl Into<PathBuf>) -> FileHandle {
        Self::new(path).into_handle()
    }
}

pub(crate) fn leaf_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

#[async_trait]
impl FileBlobPort for FsFile {
    fn name(&self) -> String {
        leaf_name(&self.path)
    }

    fn size_hint(&self) -> Option<u64> {
        self.size
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        let data = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read file {}", self.path.display()))?;
        Ok(Bytes::from(data))
    }
}
