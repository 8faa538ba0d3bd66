use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartRecord;

/// Server-side cart tied to an authenticated user, reconciled with the
/// device-local record on load.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CartRecord>, RepositoryError>;
    async fn save(&self, user_id: &UserId, record: &CartRecord) -> Result<(), RepositoryError>;
    async fn delete(&self, user_id: &UserId) -> Result<(), RepositoryError>;
}
