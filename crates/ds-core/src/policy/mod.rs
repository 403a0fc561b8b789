mod hidden;

pub use hidden::HiddenEntryFilterV1;
