use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartRecord;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddCartItemUseCaseImpl {
    async fn current_record(&self, key: &str) -> Result<CartRecord, CartError> {
        let raw = self.storage.get(key).await?;
        let parsed = raw.and_then(|r| serde_json::from_str::<CartRecord>(&r).ok());
        let record = parsed
            .filter(|r| r.is_fresh(Utc::now()) && r.is_well_formed())
            .unwrap_or_else(|| CartRecord::empty(Utc::now()));
        Ok(record)
    }

    async fn persist(
        &self,
        key: &str,
        user: Option<&UserId>,
        record: &CartRecord,
    ) -> Result<(), CartError> {
        if record.is_empty() {
            self.storage.remove(key).await?;
        } else {
            let raw = serde_json::to_string(record)
                .map_err(|_| CartError::Repository(RepositoryError::DatabaseError))?;
            self.storage.set(key, &raw).await?;
        }

        // The server copy is a convenience mirror; a failed write must not
        // undo the device-side mutation.
        if let Some(user) = user {
            let outcome = if record.is_empty() {
                self.repository.delete(user).await
            } else {
                self.repository.save(user, record).await
            };
            if let Err(e) = outcome {
                self.logger
                    .warn(&format!("Could not mirror cart to server for {user}: {e}"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartRecord, CartError> {
        self.logger.info(&format!(
            "Adding item {} to cart {}",
            params.item.id, params.key
        ));

        let mut record = self.current_record(&params.key).await?;
        record.add_item(params.item, params.quantity)?;
        record.timestamp = Utc::now();

        self.persist(&params.key, params.user.as_ref(), &record)
            .await?;

        Ok(record)
    }
}
