use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// One host file: a name, an optional advertised size, and readable bytes.
#[async_trait]
pub trait FileBlobPort: Send + Sync {
    fn name(&self) -> String;

    /// Size advertised by the host, when it knows one up front.
    fn size_hint(&self) -> Option<u64> {
        None
    }

    async fn read_bytes(&self) -> Result<Bytes>;
}
