use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{ProductStatus, Stock};

/// Catalog product. Prices are tax-inclusive (`price`) and tax-exclusive
/// (`price_excl_tax`); carts and snapshots always use the inclusive one.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Internal SKU-style reference. Optional, unique when present.
    pub reference: Option<String>,
    pub price: f64,
    pub price_excl_tax: f64,
    /// Free-text category path, e.g. "cochecitos/sillas-de-paseo".
    pub category: String,
    pub brand: Option<String>,
    pub images: Vec<String>,
    pub stock: Stock,
    pub status: ProductStatus,
    pub featured: bool,
    pub sales_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub reference: Option<String>,
    pub price: f64,
    pub price_excl_tax: f64,
    pub category: String,
    pub brand: Option<String>,
    pub images: Vec<String>,
    pub stock: Stock,
    pub status: ProductStatus,
    pub featured: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate(&props)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            reference: props.reference,
            price: props.price,
            price_excl_tax: props.price_excl_tax,
            category: props.category,
            brand: props.brand,
            images: props.images,
            stock: props.stock,
            status: props.status,
            featured: props.featured,
            sales_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Full-field update preserving identity, sales figures and creation date.
    pub fn apply(&self, props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate(&props)?;

        Ok(Self {
            id: self.id,
            name: props.name,
            reference: props.reference,
            price: props.price,
            price_excl_tax: props.price_excl_tax,
            category: props.category,
            brand: props.brand,
            images: props.images,
            stock: props.stock,
            status: props.status,
            featured: props.featured,
            sales_count: self.sales_count,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    fn validate(props: &NewProductProps) -> Result<(), ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.price < 0.0 || props.price_excl_tax < 0.0 {
            return Err(ProductError::PriceNegative);
        }
        if props.stock.available < 0 || props.stock.min_stock < 0 {
            return Err(ProductError::StockNegative);
        }
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        reference: Option<String>,
        price: f64,
        price_excl_tax: f64,
        category: String,
        brand: Option<String>,
        images: Vec<String>,
        stock: Stock,
        status: ProductStatus,
        featured: bool,
        sales_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            reference,
            price,
            price_excl_tax,
            category,
            brand,
            images,
            stock,
            status,
            featured,
            sales_count,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            name: "Cuna colecho".to_string(),
            reference: Some("CUN-001".to_string()),
            price: 149.99,
            price_excl_tax: 123.96,
            category: "habitacion/cunas".to_string(),
            brand: Some("Chicco".to_string()),
            images: vec!["https://cdn.example.com/cuna.jpg".to_string()],
            stock: Stock::new(12, 3),
            status: ProductStatus::Active,
            featured: true,
        }
    }

    #[test]
    fn should_create_product_with_zero_sales() {
        let product = Product::new(props()).unwrap();

        assert_eq!(product.name, "Cuna colecho");
        assert_eq!(product.sales_count, 0);
        assert_eq!(product.stock.available, 12);
    }

    #[test]
    fn should_reject_empty_name() {
        let mut p = props();
        p.name = "   ".to_string();

        assert!(matches!(Product::new(p), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut p = props();
        p.price = -1.0;

        assert!(matches!(Product::new(p), Err(ProductError::PriceNegative)));
    }

    #[test]
    fn should_reject_negative_stock() {
        let mut p = props();
        p.stock = Stock::new(-1, 0);

        assert!(matches!(Product::new(p), Err(ProductError::StockNegative)));
    }

    #[test]
    fn should_preserve_identity_and_sales_on_apply() {
        let mut product = Product::new(props()).unwrap();
        product.sales_count = 7;

        let mut updated_props = props();
        updated_props.name = "Cuna colecho XL".to_string();
        let updated = product.apply(updated_props).unwrap();

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.sales_count, 7);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, "Cuna colecho XL");
    }
}
