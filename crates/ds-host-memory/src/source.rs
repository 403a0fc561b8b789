use ds_core::ports::ItemSourcePort;
use ds_core::{FileHandle, ItemSource, TransferItem};

/// A synthetic item source. Lists stay `None` until filled, so tests can
/// model hosts that omit one list entirely.
#[derive(Default)]
pub struct MemoryItemSource {
    items: Option<Vec<TransferItem>>,
    files: Option<Vec<FileHandle>>,
}

impl MemoryItemSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<TransferItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_files(mut self, files: Vec<FileHandle>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn into_source(self) -> ItemSource {
        ItemSource::from_port(self)
    }
}

impl ItemSourcePort for MemoryItemSource {
    fn items(&self) -> Option<Vec<TransferItem>> {
        self.items.clone()
    }

    fn files(&self) -> Option<Vec<FileHandle>> {
        self.files.clone()
    }
}
