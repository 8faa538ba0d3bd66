use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::birth_list::model::{
    BirthList, BirthListItem, Contributor, ProductSnapshot,
};
use business::domain::birth_list::value_objects::{BirthListStatus, ItemState};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ItemStateDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "reserved")]
    Reserved,
    #[oai(rename = "purchased")]
    Purchased,
}

impl From<ItemState> for ItemStateDto {
    fn from(state: ItemState) -> Self {
        match state {
            ItemState::Pending => ItemStateDto::Pending,
            ItemState::Reserved => ItemStateDto::Reserved,
            ItemState::Purchased => ItemStateDto::Purchased,
        }
    }
}

impl From<ItemStateDto> for ItemState {
    fn from(dto: ItemStateDto) -> Self {
        match dto {
            ItemStateDto::Pending => ItemState::Pending,
            ItemStateDto::Reserved => ItemState::Reserved,
            ItemStateDto::Purchased => ItemState::Purchased,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum BirthListStatusDto {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "completed")]
    Completed,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<BirthListStatus> for BirthListStatusDto {
    fn from(status: BirthListStatus) -> Self {
        match status {
            BirthListStatus::Active => BirthListStatusDto::Active,
            BirthListStatus::Completed => BirthListStatusDto::Completed,
            BirthListStatus::Cancelled => BirthListStatusDto::Cancelled,
        }
    }
}

/// Product display fields as captured when the item was added.
#[derive(Debug, Clone, Object)]
pub struct ProductSnapshotDto {
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub reference: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    pub category: String,
}

impl From<&ProductSnapshot> for ProductSnapshotDto {
    fn from(snapshot: &ProductSnapshot) -> Self {
        Self {
            name: snapshot.name().to_string(),
            reference: snapshot.reference().map(|r| r.to_string()),
            price: snapshot.price(),
            image: snapshot.image().map(|i| i.to_string()),
            brand: snapshot.brand().map(|b| b.to_string()),
            category: snapshot.category().to_string(),
        }
    }
}

/// Guest identity attached to a reservation or purchase.
#[derive(Debug, Clone, Object)]
pub struct ContributorRequest {
    /// Contributor name (cannot be empty)
    pub name: String,
    /// Contact email (cannot be empty)
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    /// Message for the parents
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<ContributorRequest> for Contributor {
    fn from(request: ContributorRequest) -> Self {
        Contributor::new(request.name, request.email, request.phone, request.message)
    }
}

#[derive(Debug, Clone, Object)]
pub struct ContributorResponse {
    pub name: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    /// Timestamp of the commitment
    #[oai(skip_serializing_if_is_none)]
    pub date: Option<DateTime<Utc>>,
}

impl From<&Contributor> for ContributorResponse {
    fn from(contributor: &Contributor) -> Self {
        Self {
            name: contributor.name.clone(),
            email: contributor.email.clone(),
            phone: contributor.phone.clone(),
            message: contributor.message.clone(),
            date: contributor.date,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BirthListItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Catalog product the item points to
    pub product_id: String,
    /// Display fields frozen at add time
    pub snapshot: ProductSnapshotDto,
    pub quantity: u32,
    pub state: ItemStateDto,
    pub priority: i32,
    #[oai(skip_serializing_if_is_none)]
    pub contributor: Option<ContributorResponse>,
}

impl From<&BirthListItem> for BirthListItemResponse {
    fn from(item: &BirthListItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            snapshot: (&item.snapshot).into(),
            quantity: item.quantity,
            state: item.state.into(),
            priority: item.priority,
            contributor: item.contributor.as_ref().map(|c| c.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BirthListResponse {
    /// List unique identifier
    pub id: String,
    /// Owner user id
    pub owner_id: String,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub baby_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub due_date: Option<DateTime<Utc>>,
    /// Whether anonymous visitors may view the list
    pub is_public: bool,
    pub status: BirthListStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub theme: Option<String>,
    /// Items in insertion order
    pub items: Vec<BirthListItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BirthList> for BirthListResponse {
    fn from(list: BirthList) -> Self {
        Self {
            id: list.id.to_string(),
            owner_id: list.owner_id.to_string(),
            title: list.title,
            description: list.description,
            baby_name: list.baby_name,
            due_date: list.due_date,
            is_public: list.is_public,
            status: list.status.into(),
            theme: list.theme,
            items: list.items.iter().map(|i| i.into()).collect(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateBirthListRequest {
    /// List title (cannot be empty)
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub baby_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub due_date: Option<DateTime<Utc>>,
    /// Whether anonymous visitors may view the list
    pub is_public: bool,
    #[oai(skip_serializing_if_is_none)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog product to add
    pub product_id: String,
    /// Desired units (must be at least 1)
    pub quantity: u32,
    /// Display ordering hint, higher shows first
    #[oai(default)]
    pub priority: i32,
}

/// One entry of the batch item edit. State is not editable through this path.
#[derive(Debug, Clone, Object)]
pub struct ItemPatchRequest {
    pub item_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemsRequest {
    pub items: Vec<ItemPatchRequest>,
}
