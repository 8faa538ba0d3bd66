use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::BirthList;

#[async_trait]
pub trait BirthListRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<BirthList, RepositoryError>;
    async fn get_by_owner(&self, owner_id: &UserId) -> Result<Vec<BirthList>, RepositoryError>;
    /// Persists the list header and its full item collection.
    async fn save(&self, list: &BirthList) -> Result<(), RepositoryError>;
}
