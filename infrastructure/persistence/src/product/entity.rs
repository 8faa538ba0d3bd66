use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductStatus, Stock};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub reference: Option<String>,
    pub price: f64,
    pub price_excl_tax: f64,
    pub category: String,
    pub brand: Option<String>,
    pub images: Json<Vec<String>>,
    pub stock_available: i32,
    pub min_stock: i32,
    pub status: String,
    pub featured: bool,
    pub sales_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.reference,
            self.price,
            self.price_excl_tax,
            self.category,
            self.brand,
            self.images.0,
            Stock::new(self.stock_available, self.min_stock),
            self.status
                .parse::<ProductStatus>()
                .unwrap_or(ProductStatus::Inactive),
            self.featured,
            self.sales_count,
            self.created_at,
            self.updated_at,
        )
    }
}
