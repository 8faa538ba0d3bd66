use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::birth_list::model::{BirthList, BirthListItem, Contributor, ProductSnapshot};
use business::domain::birth_list::value_objects::{BirthListStatus, ItemState};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct BirthListEntity {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub baby_name: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_public: bool,
    pub status: String,
    pub theme: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BirthListEntity {
    pub fn into_domain(self, items: Vec<BirthListItem>) -> BirthList {
        BirthList::from_repository(
            self.id,
            UserId::new(&self.owner_id),
            self.title,
            self.description,
            self.baby_name,
            self.due_date,
            self.is_public,
            self.status
                .parse::<BirthListStatus>()
                .unwrap_or(BirthListStatus::Active),
            self.theme,
            items,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Item rows keep the product snapshot and contributor as JSON documents;
/// the state travels as its numeric code.
#[derive(Debug, FromRow)]
pub struct BirthListItemEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub snapshot: Json<ProductSnapshot>,
    pub quantity: i32,
    pub state: i16,
    pub priority: i32,
    pub contributor: Option<Json<Contributor>>,
}

impl BirthListItemEntity {
    pub fn into_domain(self) -> BirthListItem {
        BirthListItem::from_repository(
            self.id,
            self.product_id,
            self.snapshot.0,
            self.quantity.max(0) as u32,
            ItemState::from_code(self.state).unwrap_or(ItemState::Pending),
            self.priority,
            self.contributor.map(|c| c.0),
        )
    }
}
