use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartRecord;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::load::{LoadCartParams, LoadCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct LoadCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl LoadCartUseCaseImpl {
    /// Read the device record, discarding anything stale or malformed so a
    /// corrupted blob never reaches a caller.
    async fn device_record(&self, key: &str) -> Result<Option<CartRecord>, CartError> {
        let Some(raw) = self.storage.get(key).await? else {
            return Ok(None);
        };

        let parsed: Option<CartRecord> = serde_json::from_str(&raw).ok();
        let valid = parsed
            .as_ref()
            .is_some_and(|r| r.is_fresh(Utc::now()) && r.is_well_formed());
        if !valid {
            self.logger
                .warn(&format!("Discarding stale or malformed cart for key {key}"));
            if let Err(e) = self.storage.remove(key).await {
                self.logger
                    .warn(&format!("Could not remove invalid cart {key}: {e}"));
            }
            return Ok(None);
        }

        Ok(parsed)
    }
}

#[async_trait]
impl LoadCartUseCase for LoadCartUseCaseImpl {
    async fn execute(&self, params: LoadCartParams) -> Result<CartRecord, CartError> {
        self.logger
            .debug(&format!("Loading cart for key {}", params.key));

        let device = self.device_record(&params.key).await?;

        // With a session active the server copy wins outright. Merging line
        // by line produced duplicated gifts in practice, so the device record
        // is replaced, not reconciled.
        if let Some(user) = &params.user {
            if let Some(server) = self.repository.find_by_user(user).await? {
                if !server.is_empty() && server.is_well_formed() {
                    let refreshed = CartRecord {
                        timestamp: Utc::now(),
                        ..server
                    };
                    let raw = serde_json::to_string(&refreshed)
                        .map_err(|_| CartError::Repository(RepositoryError::DatabaseError))?;
                    self.storage.set(&params.key, &raw).await?;
                    return Ok(refreshed);
                }
            }
        }

        Ok(device.unwrap_or_else(|| CartRecord::empty(Utc::now())))
    }
}
