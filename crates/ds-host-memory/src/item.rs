use anyhow::{bail, Result};
use async_trait::async_trait;
use bytes::Bytes;

use ds_core::ports::TransferItemPort;
use ds_core::{EntryHandle, FileHandle, ItemKind, MimeType, TransferItem};

use crate::file::MemoryFile;

/// A synthetic transfer item.
///
/// Constructors cover the shapes hosts produce: plain text, custom-kind
/// payloads, bare files, and file items that also resolve to a directory
/// entry. [`MemoryItem::entry`] builds an item exposing only an entry, the
/// shape a directory drop takes.
pub struct MemoryItem {
    kind: ItemKind,
    mime: MimeType,
    file: Option<FileHandle>,
    entry: Option<EntryHandle>,
    text: Option<String>,
}

impl MemoryItem {
    /// A `string`-kind item with a `text/plain` payload.
    pub fn text(text: impl Into<String>) -> TransferItem {
        Self::custom(ItemKind::String, MimeType::text_plain(), text)
    }

    /// A non-file item with an arbitrary kind label and MIME type.
    pub fn custom(
        kind: ItemKind,
        mime: MimeType,
        text: impl Into<String>,
    ) -> TransferItem {
        TransferItem::from_port(Self {
            kind,
            mime,
            file: None,
            entry: None,
            text: Some(text.into()),
        })
    }

    /// A file-kind item holding an in-memory file, with no entry side.
    pub fn file(name: impl Into<String>, data: impl Into<Bytes>) -> TransferItem {
        Self::file_handle(MemoryFile::handle(name, data))
    }

    /// A file-kind item wrapping an existing handle.
    pub fn file_handle(handle: FileHandle) -> TransferItem {
        TransferItem::from_port(Self {
            kind: ItemKind::File,
            mime: MimeType::octet_stream(),
            file: Some(handle),
            entry: None,
            text: None,
        })
    }

    /// A file-kind item exposing only a directory entry.
    pub fn entry(entry: EntryHandle) -> TransferItem {
        TransferItem::from_port(Self {
            kind: ItemKind::File,
            mime: MimeType::octet_stream(),
            file: None,
            entry: Some(entry),
            text: None,
        })
    }

    /// A file-kind item reachable both as a handle and as an entry, the way
    /// permissive hosts expose dropped files.
    pub fn file_with_entry(handle: FileHandle, entry: EntryHandle) -> TransferItem {
        TransferItem::from_port(Self {
            kind: ItemKind::File,
            mime: MimeType::octet_stream(),
            file: Some(handle),
            entry: Some(entry),
            text: None,
        })
    }
}

#[async_trait]
impl TransferItemPort for MemoryItem {
    fn kind(&self) -> ItemKind {
        self.kind.clone()
    }

    fn mime(&self) -> MimeType {
        self.mime.clone()
    }

    fn as_file(&self) -> Option<FileHandle> {
        self.file.clone()
    }

    fn as_entry(&self) -> Option<EntryHandle> {
        self.entry.clone()
    }

    async fn read_string(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => bail!("item of kind '{}' has no string payload", self.kind),
        }
    }
}
