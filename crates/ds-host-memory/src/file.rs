use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use ds_core::ports::FileBlobPort;
use ds_core::FileHandle;

/// A file whose bytes live in memory.
pub struct MemoryFile {
    name: String,
    data: Bytes,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn into_handle(self) -> FileHandle {
        FileHandle::from_port(self)
    }

    /// Shortcut: build the file and wrap it in a handle in one step.
    pub fn handle(name: impl Into<String>, data: impl Into<Bytes>) -> FileHandle {
        Self::new(name, data).into_handle()
    }
}

#[async_trait]
impl FileBlobPort for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size_hint(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }

    async fn read_bytes(&self) -> Result<Bytes> {
        Ok(self.data.clone())
    }
}
