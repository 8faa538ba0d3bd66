use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::cart::model::{CartItem, CartItemKind, CartRecord, ListInfo};
use business::domain::shared::value_objects::UserId;

use crate::api::birth_list::dto::ItemStateDto;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CartItemKindDto {
    #[oai(rename = "regular")]
    Regular,
    #[oai(rename = "gift")]
    Gift,
}

impl From<CartItemKind> for CartItemKindDto {
    fn from(kind: CartItemKind) -> Self {
        match kind {
            CartItemKind::Regular => CartItemKindDto::Regular,
            CartItemKind::Gift => CartItemKindDto::Gift,
        }
    }
}

impl From<CartItemKindDto> for CartItemKind {
    fn from(dto: CartItemKindDto) -> Self {
        match dto {
            CartItemKindDto::Regular => CartItemKind::Regular,
            CartItemKindDto::Gift => CartItemKind::Gift,
        }
    }
}

/// Link from a pledged gift back to the registry line it belongs to.
#[derive(Debug, Clone, Object)]
pub struct ListInfoDto {
    pub list_id: String,
    pub item_id: String,
    pub list_owner_id: String,
    pub state: ItemStateDto,
    pub priority: i32,
}

impl ListInfoDto {
    /// Fails when either id is not a valid UUID.
    pub fn into_domain(self) -> Result<ListInfo, String> {
        let list_id =
            Uuid::parse_str(&self.list_id).map_err(|_| "cart.invalid_list_id".to_string())?;
        let item_id =
            Uuid::parse_str(&self.item_id).map_err(|_| "cart.invalid_item_id".to_string())?;
        Ok(ListInfo {
            list_id,
            item_id,
            list_owner_id: UserId::new(self.list_owner_id),
            state: self.state.into(),
            priority: self.priority,
        })
    }
}

impl From<&ListInfo> for ListInfoDto {
    fn from(info: &ListInfo) -> Self {
        Self {
            list_id: info.list_id.to_string(),
            item_id: info.item_id.to_string(),
            list_owner_id: info.list_owner_id.to_string(),
            state: info.state.into(),
            priority: info.priority,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product id for regular lines, registry item id for gifts
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(rename = "type")]
    pub kind: CartItemKindDto,
    #[oai(skip_serializing_if_is_none)]
    pub list_info: Option<ListInfoDto>,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
            kind: item.kind.into(),
            list_info: item.list_info.as_ref().map(|i| i.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Last write timestamp; drives the freshness window
    pub timestamp: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub general_note: Option<String>,
}

impl From<CartRecord> for CartResponse {
    fn from(record: CartRecord) -> Self {
        Self {
            items: record.items.iter().map(|i| i.into()).collect(),
            timestamp: record.timestamp,
            general_note: record.general_note,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product id for regular lines, registry item id for gifts
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Units to add; gifts are pinned to one regardless
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(rename = "type")]
    pub kind: CartItemKindDto,
    /// Required for gift lines
    #[oai(skip_serializing_if_is_none)]
    pub list_info: Option<ListInfoDto>,
}

impl AddCartItemRequest {
    pub fn into_domain(self) -> Result<(CartItem, u32), String> {
        let list_info = match self.list_info {
            Some(dto) => Some(dto.into_domain()?),
            None => None,
        };
        let item = CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            image: self.image,
            kind: self.kind.into(),
            list_info,
        };
        Ok((item, self.quantity))
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartQuantityRequest {
    pub quantity: u32,
}
