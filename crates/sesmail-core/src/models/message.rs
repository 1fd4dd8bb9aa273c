/// Raw RFC 5322 message as read from disk
use crate::error::SesMailError;
use std::path::Path;

/// Complete message (headers plus body) kept as opaque bytes
///
/// The bytes are never transcoded: what was read is exactly what gets sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    data: Vec<u8>,
}

impl RawMessage {
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Reads the whole file at `path` into memory
    pub async fn read_from(path: impl AsRef<Path>) -> Result<Self, SesMailError> {
        let path = path.as_ref();
        tracing::debug!("Reading file ...");

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| SesMailError::file(path, e))?;

        let message = Self { data };
        tracing::debug!(raw_size = message.len());
        Ok(message)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
