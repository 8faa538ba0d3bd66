use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartRecord;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartQuantityUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCartQuantityUseCaseImpl {
    async fn current_record(&self, key: &str) -> Result<CartRecord, CartError> {
        let raw = self.storage.get(key).await?;
        let parsed = raw.and_then(|r| serde_json::from_str::<CartRecord>(&r).ok());
        parsed
            .filter(|r| r.is_fresh(Utc::now()) && r.is_well_formed())
            .ok_or(CartError::ItemNotFound)
    }

    async fn persist(
        &self,
        key: &str,
        user: Option<&UserId>,
        record: &CartRecord,
    ) -> Result<(), CartError> {
        let raw = serde_json::to_string(record)
            .map_err(|_| CartError::Repository(RepositoryError::DatabaseError))?;
        self.storage.set(key, &raw).await?;

        if let Some(user) = user {
            if let Err(e) = self.repository.save(user, record).await {
                self.logger
                    .warn(&format!("Could not mirror cart to server for {user}: {e}"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartRecord, CartError> {
        self.logger.info(&format!(
            "Updating quantity of item {} in cart {}",
            params.item_id, params.key
        ));

        let mut record = self.current_record(&params.key).await?;
        record.update_quantity(&params.item_id, params.quantity)?;
        record.timestamp = Utc::now();

        self.persist(&params.key, params.user.as_ref(), &record)
            .await?;

        Ok(record)
    }
}
