//! Port interfaces for the application layer
//!
//! Ports define the contract between the normalization logic and the host
//! environment that produced the event. The core stays independent of any
//! concrete host: a desktop shell, a test harness, and a filesystem walker
//! all plug in through the same traits.
//!
//! Handles in [`crate::item`] wrap these ports in `Arc` so records can be
//! cloned, compared by identity, and moved across tasks freely.

mod directory_entry;
mod entry_filter;
mod errors;
mod file_blob;
mod item_source;
mod transfer_item;

pub use directory_entry::DirectoryEntryPort;
pub use entry_filter::EntryFilterPort;
pub use errors::EntryAccessError;
pub use file_blob::FileBlobPort;
pub use item_source::ItemSourcePort;
pub use transfer_item::TransferItemPort;
