use ds_core::{FileHandle, SourceEvent, TransferItem};

use crate::source::MemoryItemSource;

/// Fluent builder for synthetic events.
///
/// A source appears on the built event only when something was added to it:
/// `clipboard_item` creates the clipboard source, `transfer_item` and
/// `transfer_file` create the transfer source. An untouched builder yields
/// an event with neither.
///
/// ```
/// use ds_host_memory::{EventBuilder, MemoryItem};
///
/// let event = EventBuilder::new()
///     .transfer_item(MemoryItem::text("hello"))
///     .transfer_file(ds_host_memory::MemoryFile::handle("a.txt", "abc"))
///     .build();
/// assert_eq!(event.item_list().len(), 1);
/// assert_eq!(event.file_list().len(), 1);
/// ```
#[derive(Default)]
pub struct EventBuilder {
    clipboard_items: Option<Vec<TransferItem>>,
    transfer_items: Option<Vec<TransferItem>>,
    transfer_files: Option<Vec<FileHandle>>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clipboard_item(mut self, item: TransferItem) -> Self {
        self.clipboard_items.get_or_insert_with(Vec::new).push(item);
        self
    }

    pub fn transfer_item(mut self, item: TransferItem) -> Self {
        self.transfer_items.get_or_insert_with(Vec::new).push(item);
        self
    }

    pub fn transfer_file(mut self, file: FileHandle) -> Self {
        self.transfer_files.get_or_insert_with(Vec::new).push(file);
        self
    }

    pub fn build(self) -> SourceEvent {
        let clipboard = self
            .clipboard_items
            .map(|items| MemoryItemSource::new().with_items(items).into_source());

        let transfer = match (self.transfer_items, self.transfer_files) {
            (None, None) => None,
            (items, files) => {
                let mut source = MemoryItemSource::new();
                if let Some(items) = items {
                    source = source.with_items(items);
                }
                if let Some(files) = files {
                    source = source.with_files(files);
                }
                Some(source.into_source())
            }
        };

        SourceEvent::new(clipboard, transfer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryFile, MemoryItem};

    #[test]
    fn test_untouched_builder_yields_empty_event() {
        let event = EventBuilder::new().build();
        assert!(event.clipboard.is_none());
        assert!(event.transfer.is_none());
    }

    #[test]
    fn test_clipboard_items_create_the_clipboard_source() {
        let event = EventBuilder::new()
            .clipboard_item(MemoryItem::text("x"))
            .build();

        assert!(event.clipboard.is_some());
        assert!(event.transfer.is_none());
        assert_eq!(event.item_list().len(), 1);
    }

    #[test]
    fn test_transfer_files_alone_create_the_transfer_source() {
        let event = EventBuilder::new()
            .transfer_file(MemoryFile::handle("a.txt", ""))
            .build();

        assert!(event.transfer.is_some());
        assert!(event.item_list().is_empty());
        assert_eq!(event.file_list().len(), 1);
    }
}
