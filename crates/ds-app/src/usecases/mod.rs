//! Normalization use cases
//!
//! One use case per event shape. Both resolve exactly once, after every
//! nested asynchronous branch has completed, and both fail fast: the first
//! host failure anywhere in the fan-out aborts the whole normalization.

pub mod normalize_clipboard;
pub mod normalize_drop;

pub use normalize_clipboard::NormalizeClipboardUseCase;
pub use normalize_drop::NormalizeDropUseCase;
