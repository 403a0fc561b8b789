use anyhow::Result;
use async_trait::async_trait;

use crate::item::{EntryHandle, FileHandle, ItemKind, MimeType};

/// One item of a clipboard or drag-and-drop payload.
///
/// `kind` and `mime` are cheap host metadata reads. `as_file` and `as_entry`
/// are meaningful for file-kind items only; `as_entry` defaults to `None`
/// for hosts without directory support. `read_string` extracts the text
/// payload of non-file items.
#[async_trait]
pub trait TransferItemPort: Send + Sync {
    fn kind(&self) -> ItemKind;

    fn mime(&self) -> MimeType;

    fn as_file(&self) -> Option<FileHandle>;

    fn as_entry(&self) -> Option<EntryHandle> {
        None
    }

    async fn read_string(&self) -> Result<String>;
}
