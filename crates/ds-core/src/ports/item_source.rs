use crate::item::{FileHandle, TransferItem};

/// A host object carrying transferable content, such as clipboard data or
/// drag-and-drop transfer data. Either list may be absent on hosts that do
/// not expose it.
pub trait ItemSourcePort: Send + Sync {
    fn items(&self) -> Option<Vec<TransferItem>>;

    fn files(&self) -> Option<Vec<FileHandle>>;
}
