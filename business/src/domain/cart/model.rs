use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::birth_list::value_objects::ItemState;
use crate::domain::shared::value_objects::UserId;

use super::errors::CartError;

/// A record older than this is treated as abandoned and dropped on load.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartItemKind {
    Regular,
    Gift,
}

/// Link from a pledged gift back to the registry line it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListInfo {
    pub list_id: Uuid,
    pub item_id: Uuid,
    pub list_owner_id: UserId,
    pub state: ItemState,
    pub priority: i32,
}

/// One cart line. `id` is the catalog product id for regular items and the
/// registry item id for gifts, kept as a plain string for storage heritage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: CartItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_info: Option<ListInfo>,
}

fn default_kind() -> CartItemKind {
    CartItemKind::Regular
}

impl CartItem {
    /// Shape check applied when a stored record is read back: anything that
    /// no longer looks like a sellable line invalidates the whole record.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.name.trim().is_empty()
            && self.price.is_finite()
            && self.price > 0.0
            && self.quantity >= 1
    }

    fn is_gift(&self) -> bool {
        self.kind == CartItemKind::Gift
    }
}

/// The full persisted tuple. Serialized atomically on every mutation; the
/// timestamp is refreshed on every successful write and is the sole expiry
/// signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    pub items: Vec<CartItem>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_note: Option<String>,
}

impl CartRecord {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            items: Vec::new(),
            timestamp: now,
            general_note: None,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.timestamp <= Duration::hours(FRESHNESS_WINDOW_HOURS)
    }

    pub fn is_well_formed(&self) -> bool {
        self.items.iter().all(CartItem::is_well_formed)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line, or grow an existing regular line. Gift lines are
    /// single-instance with quantity pinned to 1 and must carry list info.
    pub fn add_item(&mut self, incoming: CartItem, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityInvalid);
        }
        if !(incoming.price.is_finite() && incoming.price > 0.0) {
            return Err(CartError::PriceInvalid);
        }

        if incoming.is_gift() {
            if incoming.list_info.is_none() {
                return Err(CartError::GiftMissingListInfo);
            }
            let duplicate = self
                .items
                .iter()
                .any(|i| i.is_gift() && i.id == incoming.id);
            if duplicate {
                return Err(CartError::GiftAlreadyPledged);
            }
            self.items.push(CartItem {
                quantity: 1,
                ..incoming
            });
            return Ok(());
        }

        match self
            .items
            .iter_mut()
            .find(|i| !i.is_gift() && i.id == incoming.id)
        {
            Some(existing) => {
                existing.quantity += quantity;
                // Refresh display fields from the incoming product.
                existing.name = incoming.name;
                existing.price = incoming.price;
                existing.image = incoming.image;
            }
            None => self.items.push(CartItem {
                quantity,
                ..incoming
            }),
        }
        Ok(())
    }

    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityInvalid);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(CartError::ItemNotFound)?;
        if item.is_gift() {
            return Err(CartError::GiftLocked);
        }
        item.quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, item_id: &str) -> Result<(), CartError> {
        let item = self
            .items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or(CartError::ItemNotFound)?;
        if item.is_gift() {
            return Err(CartError::GiftLocked);
        }
        self.items.retain(|i| i.id != item_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular(id: &str, price: f64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Producto {id}"),
            price,
            quantity: 1,
            image: Some("https://cdn.example.com/p.jpg".to_string()),
            kind: CartItemKind::Regular,
            list_info: None,
        }
    }

    fn gift(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Regalo {id}"),
            price: 19.95,
            quantity: 1,
            image: None,
            kind: CartItemKind::Gift,
            list_info: Some(ListInfo {
                list_id: Uuid::new_v4(),
                item_id: Uuid::new_v4(),
                list_owner_id: UserId::new("owner-1"),
                state: ItemState::Reserved,
                priority: 0,
            }),
        }
    }

    #[test]
    fn should_increment_existing_regular_item_and_refresh_fields() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(regular("p1", 10.0), 2).unwrap();

        let mut refreshed = regular("p1", 12.5);
        refreshed.name = "Producto p1 (nuevo)".to_string();
        record.add_item(refreshed, 1).unwrap();

        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].quantity, 3);
        assert_eq!(record.items[0].price, 12.5);
        assert_eq!(record.items[0].name, "Producto p1 (nuevo)");
    }

    #[test]
    fn should_reject_duplicate_gift() {
        let mut record = CartRecord::empty(Utc::now());
        let pledged = gift("g1");
        record.add_item(pledged.clone(), 1).unwrap();

        let result = record.add_item(pledged, 1);

        assert!(matches!(result, Err(CartError::GiftAlreadyPledged)));
        assert_eq!(record.items.len(), 1);
    }

    #[test]
    fn should_require_list_info_on_gift() {
        let mut record = CartRecord::empty(Utc::now());
        let mut orphan = gift("g1");
        orphan.list_info = None;

        let result = record.add_item(orphan, 1);

        assert!(matches!(result, Err(CartError::GiftMissingListInfo)));
    }

    #[test]
    fn should_pin_gift_quantity_to_one() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(gift("g1"), 5).unwrap();

        assert_eq!(record.items[0].quantity, 1);
    }

    #[test]
    fn should_reject_quantity_update_on_gift() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(gift("g1"), 1).unwrap();

        let result = record.update_quantity("g1", 3);

        assert!(matches!(result, Err(CartError::GiftLocked)));
        assert_eq!(record.items[0].quantity, 1);
    }

    #[test]
    fn should_reject_removal_of_gift() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(gift("g1"), 1).unwrap();

        assert!(matches!(
            record.remove_item("g1"),
            Err(CartError::GiftLocked)
        ));
    }

    #[test]
    fn should_update_quantity_of_regular_item() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(regular("p1", 10.0), 1).unwrap();

        record.update_quantity("p1", 4).unwrap();

        assert_eq!(record.items[0].quantity, 4);
    }

    #[test]
    fn should_reject_zero_quantity() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(regular("p1", 10.0), 1).unwrap();

        assert!(matches!(
            record.add_item(regular("p2", 5.0), 0),
            Err(CartError::QuantityInvalid)
        ));
        assert!(matches!(
            record.update_quantity("p1", 0),
            Err(CartError::QuantityInvalid)
        ));
    }

    #[test]
    fn should_expire_after_freshness_window() {
        let now = Utc::now();
        let record = CartRecord {
            items: vec![regular("p1", 10.0)],
            timestamp: now - Duration::hours(FRESHNESS_WINDOW_HOURS) - Duration::minutes(1),
            general_note: None,
        };

        assert!(!record.is_fresh(now));
    }

    #[test]
    fn should_stay_fresh_inside_window() {
        let now = Utc::now();
        let record = CartRecord {
            items: vec![regular("p1", 10.0)],
            timestamp: now - Duration::hours(23),
            general_note: None,
        };

        assert!(record.is_fresh(now));
    }

    #[test]
    fn should_round_trip_record_through_json() {
        let mut record = CartRecord::empty(Utc::now());
        record.add_item(regular("p1", 10.0), 2).unwrap();
        record.add_item(gift("g1"), 1).unwrap();
        record.general_note = Some("Envolver para regalo".to_string());

        let serialized = serde_json::to_string(&record).unwrap();
        let restored: CartRecord = serde_json::from_str(&serialized).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn should_detect_malformed_items() {
        let mut record = CartRecord::empty(Utc::now());
        record.items.push(CartItem {
            id: "p1".to_string(),
            name: "Producto".to_string(),
            price: 0.0,
            quantity: 1,
            image: None,
            kind: CartItemKind::Regular,
            list_info: None,
        });

        assert!(!record.is_well_formed());
    }
}
