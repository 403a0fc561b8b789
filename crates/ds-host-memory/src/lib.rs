//! # ds-host-memory
//!
//! In-memory host adapter: synthetic files, directory trees, transfer items,
//! and item sources, plus a fluent [`EventBuilder`] for whole events. Backs
//! unit and integration tests, and any consumer that wants to feed synthetic
//! content through normalization.

mod builder;
mod entry;
mod file;
mod item;
mod source;

pub use builder::EventBuilder;
pub use entry::MemoryEntry;
pub use file::MemoryFile;
pub use item::MemoryItem;
pub use source::MemoryItemSource;
