//! Normalized output model
//!
//! The uniform records produced by normalization. Every heterogeneous input —
//! transfer items, raw file lists, directory trees — flattens into a sequence
//! of these.

use serde::{Deserialize, Serialize};

use crate::item::{EntryHandle, FileHandle, ItemKind, MimeType};

/// One uniform output record: either a file handle or an extracted text
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedItem {
    File(FileItem),
    Text(TextItem),
}

/// A file record. `origin` is set when the file was found by walking a
/// directory entry and points back at the entry that produced it; files taken
/// straight from an item or file list have no origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub file: FileHandle,
    pub origin: Option<EntryHandle>,
}

/// An extracted text record, carrying the host's kind label and MIME type.
///
/// Serializes to the `{kind, type, string}` shape of the host event model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub kind: ItemKind,
    #[serde(rename = "type")]
    pub mime: MimeType,
    #[serde(rename = "string")]
    pub text: String,
}

impl NormalizedItem {
    /// Create a file record with no traversal origin.
    pub fn file(file: FileHandle) -> Self {
        NormalizedItem::File(FileItem { file, origin: None })
    }

    /// Create a file record that remembers the entry it was walked out of.
    pub fn file_with_origin(file: FileHandle, origin: EntryHandle) -> Self {
        NormalizedItem::File(FileItem {
            file,
            origin: Some(origin),
        })
    }

    /// Create a text record.
    pub fn text(kind: ItemKind, mime: MimeType, text: impl Into<String>) -> Self {
        NormalizedItem::Text(TextItem {
            kind,
            mime,
            text: text.into(),
        })
    }

    /// The kind tag of this record.
    pub fn kind(&self) -> ItemKind {
        match self {
            NormalizedItem::File(_) => ItemKind::File,
            NormalizedItem::Text(t) => t.kind.clone(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, NormalizedItem::File(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NormalizedItem::Text(_))
    }

    pub fn as_file(&self) -> Option<&FileItem> {
        match self {
            NormalizedItem::File(f) => Some(f),
            NormalizedItem::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextItem> {
        match self {
            NormalizedItem::Text(t) => Some(t),
            NormalizedItem::File(_) => None,
        }
    }

    /// Whether this record holds the given file handle (identity check).
    /// Used to deduplicate the dual-source file list.
    pub fn references(&self, handle: &FileHandle) -> bool {
        match self {
            NormalizedItem::File(f) => f.file.same_handle(handle),
            NormalizedItem::Text(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use bytes::Bytes;
    use crate::ports::FileBlobPort;

    struct StubBlob(&'static str);

    #[async_trait]
    impl FileBlobPort for StubBlob {
        fn name(&self) -> String {
            self.0.to_string()
        }

        async fn read_bytes(&self) -> Result<Bytes> {
            Ok(Bytes::new())
        }
    }

    #[test]
    fn test_accessors() {
        let handle = FileHandle::from_port(StubBlob("a.txt"));
        let file = NormalizedItem::file(handle.clone());
        let text = NormalizedItem::text(ItemKind::String, MimeType::text_plain(), "hi");

        assert!(file.is_file());
        assert_eq!(file.kind(), ItemKind::File);
        assert_eq!(file.as_file().unwrap().file, handle);
        assert!(file.as_file().unwrap().origin.is_none());

        assert!(text.is_text());
        assert_eq!(text.kind(), ItemKind::String);
        assert_eq!(text.as_text().unwrap().text, "hi");
    }

    #[test]
    fn test_references_is_identity_based() {
        let handle = FileHandle::from_port(StubBlob("a.txt"));
        let twin = FileHandle::from_port(StubBlob("a.txt"));

        let record = NormalizedItem::file(handle.clone());
        assert!(record.references(&handle));
        assert!(!record.references(&twin));

        let text = NormalizedItem::text(ItemKind::String, MimeType::text_plain(), "a.txt");
        assert!(!text.references(&handle));
    }

    #[test]
    fn test_text_record_serializes_to_host_shape() {
        let text = TextItem {
            kind: ItemKind::String,
            mime: MimeType::text_plain(),
            text: "hello".to_string(),
        };
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "string",
                "type": "text/plain",
                "string": "hello",
            })
        );
    }
}
