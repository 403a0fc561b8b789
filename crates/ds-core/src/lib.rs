//! # ds-core
//!
//! Core domain model and capability ports for dropsift.
//!
//! This crate contains the pure normalization domain: the uniform item model,
//! the host capability ports, and the traversal policy. It has no knowledge of
//! any concrete host; adapters live in their own crates.

// Public module exports
pub mod event;
pub mod item;
pub mod policy;
pub mod ports;

// Re-export commonly used types at the crate root
pub use event::{ItemSource, SourceEvent};
pub use item::{
    EntryHandle, EntryKind, FileHandle, FileItem, ItemKind, MimeType, NormalizedItem, TextItem,
    TransferItem,
};
pub use policy::HiddenEntryFilterV1;
pub use ports::{
    DirectoryEntryPort, EntryAccessError, EntryFilterPort, FileBlobPort, ItemSourcePort,
    TransferItemPort,
};
