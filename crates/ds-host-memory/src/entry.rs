use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use ds_core::ports::{DirectoryEntryPort, EntryAccessError};
use ds_core::{EntryHandle, EntryKind, FileHandle};

use crate::file::MemoryFile;

/// A node of an in-memory directory tree.
///
/// Constructors return [`EntryHandle`]s directly so trees compose inline:
///
/// ```
/// use ds_host_memory::MemoryEntry;
///
/// let root = MemoryEntry::directory(
///     "photos",
///     vec![
///         MemoryEntry::file("a.jpg", &b"\xff\xd8"[..]),
///         MemoryEntry::directory("raw", vec![MemoryEntry::file("b.raw", "")]),
///     ],
/// );
/// assert!(root.is_directory());
/// ```
pub struct MemoryEntry {
    name: String,
    node: Node,
}

enum Node {
    File(FileHandle),
    Directory(Vec<EntryHandle>),
}

impl MemoryEntry {
    /// A file entry backed by an in-memory file of the same name.
    pub fn file(name: impl Into<String>, data: impl Into<Bytes>) -> EntryHandle {
        let name = name.into();
        let handle = MemoryFile::handle(name.clone(), data);
        Self::file_with(name, handle)
    }

    /// A file entry resolving to a caller-provided handle. Lets tests make
    /// the same handle reachable through an entry and a file list.
    pub fn file_with(name: impl Into<String>, handle: FileHandle) -> EntryHandle {
        EntryHandle::from_port(Self {
            name: name.into(),
            node: Node::File(handle),
        })
    }

    /// A directory entry with the given children, listed in order.
    pub fn directory(name: impl Into<String>, children: Vec<EntryHandle>) -> EntryHandle {
        EntryHandle::from_port(Self {
            name: name.into(),
            node: Node::Directory(children),
        })
    }
}

#[async_trait]
impl DirectoryEntryPort for MemoryEntry {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> EntryKind {
        match self.node {
            Node::File(_) => EntryKind::File,
            Node::Directory(_) => EntryKind::Directory,
        }
    }

    async fn file(&self) -> Result<FileHandle> {
        match &self.node {
            Node::File(handle) => Ok(handle.clone()),
            Node::Directory(_) => Err(EntryAccessError::NotAFile(self.name.clone()).into()),
        }
    }

    async fn read_entries(&self) -> Result<Vec<EntryHandle>> {
        match &self.node {
            Node::Directory(children) => Ok(children.clone()),
            Node::File(_) => Err(EntryAccessError::NotADirectory(self.name.clone()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_entry_resolves_to_its_handle() {
        let entry = MemoryEntry::file("a.txt", "abc");

        assert_eq!(entry.name(), "a.txt");
        assert!(entry.is_file());

        let file = entry.file().await.unwrap();
        assert_eq!(file.name(), "a.txt");
        assert_eq!(file.read_bytes().await.unwrap(), Bytes::from("abc"));
    }

    #[tokio::test]
    async fn test_directory_lists_children_in_order() {
        let dir = MemoryEntry::directory(
            "d",
            vec![MemoryEntry::file("1", ""), MemoryEntry::file("2", "")],
        );

        let children = dir.read_entries().await.unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), "1");
        assert_eq!(children[1].name(), "2");
    }

    #[tokio::test]
    async fn test_wrong_kind_access_fails() {
        let file = MemoryEntry::file("a.txt", "");
        let dir = MemoryEntry::directory("d", vec![]);

        let err = file.read_entries().await.unwrap_err();
        assert!(err.to_string().contains("not a directory"));

        let err = dir.file().await.unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[tokio::test]
    async fn test_file_with_preserves_handle_identity() {
        let handle = MemoryFile::handle("shared.bin", "x");
        let entry = MemoryEntry::file_with("shared.bin", handle.clone());

        let resolved = entry.file().await.unwrap();
        assert!(resolved.same_handle(&handle));
    }
}
