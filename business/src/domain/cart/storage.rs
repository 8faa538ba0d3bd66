use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Device-scoped key-value persistence for the serialized cart record.
/// Injected so tests can substitute an in-memory fake. Two devices sharing a
/// key race last-write-wins; that inconsistency is accepted.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
