use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::item::FileHandle;
use crate::ports::DirectoryEntryPort;

/// Node kind of a dropped/pasted tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Shared handle to a node in a host entry tree.
///
/// Like [`FileHandle`], equality is handle identity, never structural.
#[derive(Clone)]
pub struct EntryHandle(Arc<dyn DirectoryEntryPort>);

impl EntryHandle {
    pub fn new(port: Arc<dyn DirectoryEntryPort>) -> Self {
        Self(port)
    }

    pub fn from_port(port: impl DirectoryEntryPort + 'static) -> Self {
        Self(Arc::new(port))
    }

    /// Entry name, the last path component in the host tree.
    pub fn name(&self) -> String {
        self.0.name()
    }

    pub fn kind(&self) -> EntryKind {
        self.0.kind()
    }

    pub fn is_file(&self) -> bool {
        self.0.kind().is_file()
    }

    pub fn is_directory(&self) -> bool {
        self.0.kind().is_directory()
    }

    /// Materialize the file handle. File entries only.
    pub async fn file(&self) -> Result<FileHandle> {
        self.0.file().await
    }

    /// List all children in one call. Directory entries only.
    pub async fn read_entries(&self) -> Result<Vec<EntryHandle>> {
        self.0.read_entries().await
    }

    /// Whether two handles refer to the same host entry.
    pub fn same_entry(&self, other: &EntryHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for EntryHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_entry(other)
    }
}

impl Eq for EntryHandle {}

impl fmt::Debug for EntryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryHandle")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}
