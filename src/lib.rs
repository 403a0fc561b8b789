//! # dropsift
//!
//! Flatten clipboard and drag-and-drop events into one uniform, ordered
//! item list.
//!
//! Hosts hand over a [`SourceEvent`] carrying whatever the platform exposed:
//! transfer items, a flat file list, directory entries. Normalization fans
//! out over every item, walks directory trees (skipping hidden entries),
//! extracts string payloads, deduplicates files reachable through both
//! lists, and resolves once with the flattened records.
//!
//! ```
//! use dropsift::memory::{EventBuilder, MemoryEntry, MemoryItem};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let event = EventBuilder::new()
//!     .transfer_item(MemoryItem::text("hello"))
//!     .transfer_item(MemoryItem::entry(MemoryEntry::directory(
//!         "photos",
//!         vec![MemoryEntry::file("a.jpg", "jpeg bytes")],
//!     )))
//!     .build();
//!
//! let records = dropsift::normalize_drop(&event).await?;
//! assert_eq!(records.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! The use cases in [`ds_app`] expose the same operations with pluggable
//! traversal policies; the free functions here wire up the defaults.

pub use ds_core::{
    EntryHandle, EntryKind, FileHandle, FileItem, HiddenEntryFilterV1, ItemKind, ItemSource,
    MimeType, NormalizedItem, SourceEvent, TextItem, TransferItem,
};

pub use ds_app::{NormalizeClipboardUseCase, NormalizeDropUseCase, NormalizeError};

/// Capability ports a host adapter implements.
pub mod ports {
    pub use ds_core::ports::*;
}

/// In-memory host: synthetic events for tests and embedded use.
pub use ds_host_memory as memory;

/// Filesystem host: real directory trees as droppable entries.
#[cfg(feature = "fs-host")]
pub use ds_host_fs as fs;

/// Normalize a drop event with the default policies.
pub async fn normalize_drop(event: &SourceEvent) -> anyhow::Result<Vec<NormalizedItem>> {
    NormalizeDropUseCase::new().execute(event).await
}

/// Normalize a paste event with the default policies.
pub async fn normalize_clipboard(event: &SourceEvent) -> anyhow::Result<Vec<NormalizedItem>> {
    NormalizeClipboardUseCase::new().execute(event).await
}
