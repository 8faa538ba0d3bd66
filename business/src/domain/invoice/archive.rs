use async_trait::async_trait;

use super::errors::InvoiceError;

/// Durable storage for rendered invoice files. Re-requests stream the
/// archived bytes instead of re-rendering.
#[async_trait]
pub trait InvoiceArchive: Send + Sync {
    /// Persists the bytes and returns the storage path.
    async fn store(&self, number: &str, bytes: &[u8]) -> Result<String, InvoiceError>;
    async fn load(&self, path: &str) -> Result<Vec<u8>, InvoiceError>;
    async fn remove(&self, path: &str) -> Result<(), InvoiceError>;
}
