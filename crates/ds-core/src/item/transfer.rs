use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::item::{EntryHandle, FileHandle, ItemKind, MimeType};
use crate::ports::TransferItemPort;

/// Shared handle to one host transfer item (the clipboard/drag-and-drop
/// item union).
#[derive(Clone)]
pub struct TransferItem(Arc<dyn TransferItemPort>);

impl TransferItem {
    pub fn new(port: Arc<dyn TransferItemPort>) -> Self {
        Self(port)
    }

    pub fn from_port(port: impl TransferItemPort + 'static) -> Self {
        Self(Arc::new(port))
    }

    pub fn kind(&self) -> ItemKind {
        self.0.kind()
    }

    pub fn mime(&self) -> MimeType {
        self.0.mime()
    }

    /// Extract the file handle without an async boundary. File-kind items only.
    pub fn as_file(&self) -> Option<FileHandle> {
        self.0.as_file()
    }

    /// Resolve to an entry-tree node, when the host supports entries.
    pub fn as_entry(&self) -> Option<EntryHandle> {
        self.0.as_entry()
    }

    /// Extract the textual payload. Non-file items only.
    pub async fn read_string(&self) -> Result<String> {
        self.0.read_string().await
    }
}

impl fmt::Debug for TransferItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferItem")
            .field("kind", &self.kind())
            .field("mime", &self.mime())
            .finish()
    }
}
