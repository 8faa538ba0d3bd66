use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

use super::errors::BirthListError;
use super::value_objects::{BirthListStatus, ItemState};

/// Display fields copied from the product when an item is added to a list.
/// Fields are private so the snapshot can never be overwritten after capture;
/// the live product is referenced separately by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    name: String,
    reference: Option<String>,
    price: f64,
    image: Option<String>,
    brand: Option<String>,
    category: String,
}

impl ProductSnapshot {
    pub fn of(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            reference: product.reference.clone(),
            price: product.price,
            image: product.images.first().cloned(),
            brand: product.brand.clone(),
            category: product.category.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Identity of the person committing to buy an item. Captured at the moment
/// of reservation or purchase and kept afterwards even if the reservation is
/// cancelled (display-only residue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Server-assigned timestamp of the commitment.
    pub date: Option<DateTime<Utc>>,
}

impl Contributor {
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            message,
            date: None,
        }
    }

    fn validate(&self) -> Result<(), BirthListError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(BirthListError::ContributorInvalid);
        }
        Ok(())
    }

    fn stamped(mut self, now: DateTime<Utc>) -> Self {
        self.date = Some(now);
        self
    }
}

/// A registry line item. Holds a weak reference to the catalog product plus
/// an immutable snapshot of its display fields.
#[derive(Debug, Clone)]
pub struct BirthListItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub snapshot: ProductSnapshot,
    pub quantity: u32,
    pub state: ItemState,
    pub priority: i32,
    pub contributor: Option<Contributor>,
}

impl BirthListItem {
    fn new(product: &Product, quantity: u32, priority: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product.id,
            snapshot: ProductSnapshot::of(product),
            quantity,
            state: ItemState::Pending,
            priority,
            contributor: None,
        }
    }

    /// Reserve a pending item for the given contributor.
    pub fn reserve(
        &mut self,
        contributor: Contributor,
        now: DateTime<Utc>,
    ) -> Result<(), BirthListError> {
        match self.state {
            ItemState::Reserved => return Err(BirthListError::AlreadyInState),
            ItemState::Purchased => return Err(BirthListError::TransitionNotAllowed),
            ItemState::Pending => {}
        }
        contributor.validate()?;

        self.state = ItemState::Reserved;
        self.contributor = Some(contributor.stamped(now));
        Ok(())
    }

    /// Mark an item as bought. Allowed from pending or reserved; the stored
    /// contributor is overwritten with the buyer's identity.
    pub fn purchase(
        &mut self,
        contributor: Contributor,
        now: DateTime<Utc>,
    ) -> Result<(), BirthListError> {
        if self.state == ItemState::Purchased {
            return Err(BirthListError::AlreadyInState);
        }
        contributor.validate()?;

        self.state = ItemState::Purchased;
        self.contributor = Some(contributor.stamped(now));
        Ok(())
    }

    /// Release a reservation. Purchased items are terminal and pending items
    /// have nothing to release. Contributor data is intentionally kept.
    pub fn cancel(&mut self) -> Result<(), BirthListError> {
        match self.state {
            ItemState::Pending => Err(BirthListError::AlreadyInState),
            ItemState::Purchased => Err(BirthListError::TransitionNotAllowed),
            ItemState::Reserved => {
                self.state = ItemState::Pending;
                Ok(())
            }
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        snapshot: ProductSnapshot,
        quantity: u32,
        state: ItemState,
        priority: i32,
        contributor: Option<Contributor>,
    ) -> Self {
        Self {
            id,
            product_id,
            snapshot,
            quantity,
            state,
            priority,
            contributor,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BirthList {
    pub id: Uuid,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub baby_name: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_public: bool,
    pub status: BirthListStatus,
    pub theme: Option<String>,
    /// Items keep their insertion order.
    pub items: Vec<BirthListItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBirthListProps {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub baby_name: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_public: bool,
    pub theme: Option<String>,
}

impl BirthList {
    pub fn new(props: NewBirthListProps) -> Result<Self, BirthListError> {
        if props.title.trim().is_empty() {
            return Err(BirthListError::TitleEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: props.owner_id,
            title: props.title,
            description: props.description,
            baby_name: props.baby_name,
            due_date: props.due_date,
            is_public: props.is_public,
            status: BirthListStatus::Active,
            theme: props.theme,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Append a new pending item with a snapshot taken from the live product.
    /// Adding to a completed list reopens it.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        priority: i32,
    ) -> Result<Uuid, BirthListError> {
        if quantity == 0 {
            return Err(BirthListError::QuantityInvalid);
        }

        let item = BirthListItem::new(product, quantity, priority);
        let item_id = item.id;
        self.items.push(item);

        if self.status == BirthListStatus::Completed {
            self.status = BirthListStatus::Active;
        }
        self.touch();
        Ok(item_id)
    }

    pub fn item_mut(&mut self, item_id: Uuid) -> Result<&mut BirthListItem, BirthListError> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(BirthListError::ItemNotFound)
    }

    pub fn remove_item(&mut self, item_id: Uuid) -> Result<(), BirthListError> {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(BirthListError::ItemNotFound);
        }
        self.touch();
        Ok(())
    }

    /// Re-derive the list status after item mutations. Runs as part of the
    /// list-level save path, never inside the item state machine itself.
    pub fn refresh_status(&mut self) {
        if self.status == BirthListStatus::Cancelled {
            return;
        }
        if !self.items.is_empty() && self.items.iter().all(|i| i.state == ItemState::Purchased) {
            self.status = BirthListStatus::Completed;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        owner_id: UserId,
        title: String,
        description: Option<String>,
        baby_name: Option<String>,
        due_date: Option<DateTime<Utc>>,
        is_public: bool,
        status: BirthListStatus,
        theme: Option<String>,
        items: Vec<BirthListItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title,
            description,
            baby_name,
            due_date,
            is_public,
            status,
            theme,
            items,
            created_at,
            updated_at,
        }
    }
}
