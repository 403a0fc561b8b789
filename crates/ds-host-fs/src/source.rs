use std::path::PathBuf;

use anyhow::{bail, Result};
use async_trait::async_trait;

use ds_core::ports::{ItemSourcePort, TransferItemPort};
use ds_core::{EntryHandle, FileHandle, ItemKind, ItemSource, MimeType, SourceEvent, TransferItem};

use crate::entry::FsEntry;

/// An item source built from dropped paths, shaped like a file-manager drop:
/// every path becomes a file-kind item resolving to an entry, and plain
/// files additionally appear in the flat file list under the same handle.
pub struct FsItemSource {
    items: Vec<TransferItem>,
    files: Vec<FileHandle>,
}

impl FsItemSource {
    pub async fn from_paths<I, P>(paths: I) -> Result<ItemSource>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut items = Vec::new();
        let mut files = Vec::new();

        for path in paths {
            let path = path.into();
            let entry = FsEntry::open(&path).await?;
            if entry.is_directory() {
                items.push(FsItem::directory(entry));
                continue;
            }
            let handle = entry.file().await?;
            files.push(handle.clone());
            items.push(FsItem::file(handle, entry, &path));
        }

        Ok(ItemSource::from_port(Self { items, files }))
    }

    /// A complete drop event over the given paths.
    pub async fn drop_event<I, P>(paths: I) -> Result<SourceEvent>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Ok(SourceEvent::from_transfer(Self::from_paths(paths).await?))
    }
}

impl ItemSourcePort for FsItemSource {
    fn items(&self) -> Option<Vec<TransferItem>> {
        Some(self.items.clone())
    }

    fn files(&self) -> Option<Vec<FileHandle>> {
        Some(self.files.clone())
    }
}

/// One dropped path as a transfer item.
struct FsItem {
    mime: MimeType,
    file: Option<FileHandle>,
    entry: EntryHandle,
}

impl FsItem {
    fn directory(entry: EntryHandle) -> TransferItem {
        TransferItem::from_port(Self {
            mime: MimeType::octet_stream(),
            file: None,
            entry,
        })
    }

    fn file(handle: FileHandle, entry: EntryHandle, path: &std::path::Path) -> TransferItem {
        let mime = MimeType(mime_guess::from_path(path).first_or_octet_stream().to_string());
        TransferItem::from_port(Self {
            mime,
            file: Some(handle),
            entry,
        })
    }
}

#[async_trait]
impl TransferItemPort for FsItem {
    fn kind(&self) -> ItemKind {
        ItemKind::File
    }

    fn mime(&self) -> MimeType {
        self.mime.clone()
    }

    fn as_file(&self) -> Option<FileHandle> {
        self.file.clone()
    }

    fn as_entry(&self) -> Option<EntryHandle> {
        Some(self.entry.clone())
    }

    async fn read_string(&self) -> Result<String> {
        bail!("file item has no string payload")
    }
}
