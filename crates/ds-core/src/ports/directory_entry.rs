use anyhow::Result;
use async_trait::async_trait;

use crate::item::{EntryHandle, EntryKind, FileHandle};

/// One node of a host directory tree.
///
/// `file` resolves a file entry into its file handle; `read_entries` lists a
/// directory entry's children. Calling the operation that does not match
/// [`DirectoryEntryPort::kind`] fails with
/// [`EntryAccessError`](crate::ports::EntryAccessError).
#[async_trait]
pub trait DirectoryEntryPort: Send + Sync {
    fn name(&self) -> String;

    fn kind(&self) -> EntryKind;

    async fn file(&self) -> Result<FileHandle>;

    /// One complete listing of this directory's children. The traversal
    /// calls this once per directory; hosts that page internally must
    /// drain themselves before returning.
    async fn read_entries(&self) -> Result<Vec<EntryHandle>>;
}
