//! Source event model
//!
//! A [`SourceEvent`] is the input to normalization: up to two item sources,
//! one carrying clipboard content and one carrying drag-and-drop transfer
//! content. Which lists are consulted depends on which sources are present.

use std::fmt;
use std::sync::Arc;

use crate::item::{FileHandle, TransferItem};
use crate::ports::ItemSourcePort;

/// A handle to one host item source (clipboard data or transfer data).
#[derive(Clone)]
pub struct ItemSource(Arc<dyn ItemSourcePort>);

impl ItemSource {
    pub fn new(port: Arc<dyn ItemSourcePort>) -> Self {
        ItemSource(port)
    }

    pub fn from_port(port: impl ItemSourcePort + 'static) -> Self {
        ItemSource(Arc::new(port))
    }

    /// The source's item list, if it exposes one.
    pub fn items(&self) -> Option<Vec<TransferItem>> {
        self.0.items()
    }

    /// The source's flat file list, if it exposes one.
    pub fn files(&self) -> Option<Vec<FileHandle>> {
        self.0.files()
    }
}

impl fmt::Debug for ItemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemSource")
            .field("items", &self.0.items().map(|v| v.len()))
            .field("files", &self.0.files().map(|v| v.len()))
            .finish()
    }
}

/// The event under normalization. Paste events carry a clipboard source,
/// drop events carry a transfer source; synthetic events may carry both.
#[derive(Debug, Clone, Default)]
pub struct SourceEvent {
    pub clipboard: Option<ItemSource>,
    pub transfer: Option<ItemSource>,
}

impl SourceEvent {
    pub fn new(clipboard: Option<ItemSource>, transfer: Option<ItemSource>) -> Self {
        SourceEvent {
            clipboard,
            transfer,
        }
    }

    /// An event holding only clipboard content, as produced by a paste.
    pub fn from_clipboard(source: ItemSource) -> Self {
        SourceEvent {
            clipboard: Some(source),
            transfer: None,
        }
    }

    /// An event holding only transfer content, as produced by a drop.
    pub fn from_transfer(source: ItemSource) -> Self {
        SourceEvent {
            clipboard: None,
            transfer: Some(source),
        }
    }

    /// The item list to normalize. A present clipboard source always wins,
    /// even when its list is empty; the transfer source is consulted only
    /// when no clipboard source exists.
    pub fn item_list(&self) -> Vec<TransferItem> {
        if let Some(clipboard) = &self.clipboard {
            return clipboard.items().unwrap_or_default();
        }
        match &self.transfer {
            Some(transfer) => transfer.items().unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// The flat file list. Only the transfer source carries one.
    pub fn file_list(&self) -> Vec<FileHandle> {
        match &self.transfer {
            Some(transfer) => transfer.files().unwrap_or_default(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemKind, MimeType};
    use crate::ports::TransferItemPort;
    use anyhow::Result;
    use async_trait::async_trait;

    struct TextOnlyItem(&'static str);

    #[async_trait]
    impl TransferItemPort for TextOnlyItem {
        fn kind(&self) -> ItemKind {
            ItemKind::String
        }

        fn mime(&self) -> MimeType {
            MimeType::text_plain()
        }

        fn as_file(&self) -> Option<FileHandle> {
            None
        }

        async fn read_string(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FixedSource {
        items: Option<Vec<TransferItem>>,
        files: Option<Vec<FileHandle>>,
    }

    impl ItemSourcePort for FixedSource {
        fn items(&self) -> Option<Vec<TransferItem>> {
            self.items.clone()
        }

        fn files(&self) -> Option<Vec<FileHandle>> {
            self.files.clone()
        }
    }

    fn source_with_items(count: usize) -> ItemSource {
        let items = (0..count)
            .map(|_| TransferItem::from_port(TextOnlyItem("x")))
            .collect();
        ItemSource::from_port(FixedSource {
            items: Some(items),
            files: None,
        })
    }

    #[test]
    fn test_clipboard_items_take_precedence() {
        let event = SourceEvent::new(Some(source_with_items(2)), Some(source_with_items(5)));
        assert_eq!(event.item_list().len(), 2);
    }

    #[test]
    fn test_present_clipboard_with_no_items_hides_transfer_items() {
        let clipboard = ItemSource::from_port(FixedSource {
            items: None,
            files: None,
        });
        let event = SourceEvent::new(Some(clipboard), Some(source_with_items(3)));
        assert!(event.item_list().is_empty());
    }

    #[test]
    fn test_transfer_items_used_without_clipboard() {
        let event = SourceEvent::from_transfer(source_with_items(3));
        assert_eq!(event.item_list().len(), 3);
    }

    #[test]
    fn test_empty_event_yields_empty_lists() {
        let event = SourceEvent::default();
        assert!(event.item_list().is_empty());
        assert!(event.file_list().is_empty());
    }

    #[test]
    fn test_file_list_comes_from_transfer_only() {
        use crate::ports::FileBlobPort;
        use bytes::Bytes;

        struct NamedBlob;

        #[async_trait]
        impl FileBlobPort for NamedBlob {
            fn name(&self) -> String {
                "a.txt".to_string()
            }

            async fn read_bytes(&self) -> Result<Bytes> {
                Ok(Bytes::new())
            }
        }

        let files = vec![FileHandle::from_port(NamedBlob)];
        let transfer = ItemSource::from_port(FixedSource {
            items: None,
            files: Some(files),
        });
        let clipboard = ItemSource::from_port(FixedSource {
            items: None,
            files: None,
        });
        let event = SourceEvent::new(Some(clipboard), Some(transfer));
        assert_eq!(event.file_list().len(), 1);
    }
}
