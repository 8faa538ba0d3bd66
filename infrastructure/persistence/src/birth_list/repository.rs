use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::birth_list::model::{BirthList, BirthListItem};
use business::domain::birth_list::repository::BirthListRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{BirthListEntity, BirthListItemEntity};

const LIST_COLUMNS: &str = "id, owner_id, title, description, baby_name, due_date, is_public, \
     status, theme, created_at, updated_at";
const ITEM_COLUMNS: &str = "id, product_id, snapshot, quantity, state, priority, contributor";

pub struct BirthListRepositoryPostgres {
    pool: PgPool,
}

impl BirthListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, list_id: Uuid) -> Result<Vec<BirthListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BirthListItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM birth_list_items WHERE list_id = $1 ORDER BY position"
        ))
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Loading birth list items failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

#[async_trait]
impl BirthListRepository for BirthListRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<BirthList, RepositoryError> {
        let entity = sqlx::query_as::<_, BirthListEntity>(&format!(
            "SELECT {LIST_COLUMNS} FROM birth_lists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        let items = self.load_items(entity.id).await?;
        Ok(entity.into_domain(items))
    }

    async fn get_by_owner(&self, owner_id: &UserId) -> Result<Vec<BirthList>, RepositoryError> {
        let entities = sqlx::query_as::<_, BirthListEntity>(&format!(
            "SELECT {LIST_COLUMNS} FROM birth_lists WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut lists = Vec::with_capacity(entities.len());
        for entity in entities {
            let items = self.load_items(entity.id).await?;
            lists.push(entity.into_domain(items));
        }
        Ok(lists)
    }

    async fn save(&self, list: &BirthList) -> Result<(), RepositoryError> {
        // Header upsert and full item rewrite in one transaction so the
        // stored collection always matches the in-memory list.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            r#"INSERT INTO birth_lists (id, owner_id, title, description, baby_name, due_date, is_public, status, theme, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                baby_name = EXCLUDED.baby_name,
                due_date = EXCLUDED.due_date,
                is_public = EXCLUDED.is_public,
                status = EXCLUDED.status,
                theme = EXCLUDED.theme,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(list.id)
        .bind(list.owner_id.as_str())
        .bind(&list.title)
        .bind(&list.description)
        .bind(&list.baby_name)
        .bind(list.due_date)
        .bind(list.is_public)
        .bind(list.status.to_string())
        .bind(&list.theme)
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Saving birth list failed: {e}");
            RepositoryError::DatabaseError
        })?;

        sqlx::query("DELETE FROM birth_list_items WHERE list_id = $1")
            .bind(list.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for (position, item) in list.items.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO birth_list_items (id, list_id, product_id, snapshot, quantity, state, priority, contributor, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
            )
            .bind(item.id)
            .bind(list.id)
            .bind(item.product_id)
            .bind(Json(&item.snapshot))
            .bind(item.quantity as i32)
            .bind(item.state.code())
            .bind(item.priority)
            .bind(item.contributor.as_ref().map(Json))
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Saving birth list item failed: {e}");
                RepositoryError::DatabaseError
            })?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        Ok(())
    }
}
