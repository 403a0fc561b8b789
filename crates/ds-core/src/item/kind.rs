use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind tag of a transfer item, as reported by the host.
///
/// The drag-and-drop model knows `"file"` and `"string"`; anything else a host
/// reports is carried verbatim in [`ItemKind::Other`] so the label survives
/// into the normalized output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A file payload (`"file"`).
    File,
    /// A textual payload (`"string"`).
    String,
    /// Any other host-reported kind label.
    Other(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::File => "file",
            ItemKind::String => "string",
            ItemKind::Other(label) => label,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ItemKind::File)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        match s {
            "file" => ItemKind::File,
            "string" => ItemKind::String,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

// Serialized as the plain kind label, matching the host-facing record shape.
impl Serialize for ItemKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(ItemKind::from(label.as_str()))
    }
}
