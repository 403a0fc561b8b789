//! # ds-app
//!
//! Use-case layer: turns a [`ds_core::SourceEvent`] into the flattened,
//! uniform record list. Holds the item classifier, the recursive entry
//! walker, and the join discipline that replaces per-branch completion
//! bookkeeping with structured fan-out/fan-in.

pub mod error;
pub mod usecases;

mod fanout;
mod walk;

pub use error::NormalizeError;
pub use usecases::{NormalizeClipboardUseCase, NormalizeDropUseCase};
