use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{ProductStatus, Stock};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "inactive")]
    Inactive,
    #[oai(rename = "discontinued")]
    Discontinued,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Active => ProductStatusDto::Active,
            ProductStatus::Inactive => ProductStatusDto::Inactive,
            ProductStatus::Discontinued => ProductStatusDto::Discontinued,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Active => ProductStatus::Active,
            ProductStatusDto::Inactive => ProductStatus::Inactive,
            ProductStatusDto::Discontinued => ProductStatus::Discontinued,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StockDto {
    /// Units available for sale
    pub available: i32,
    /// Replenishment threshold
    pub min_stock: i32,
}

impl From<Stock> for StockDto {
    fn from(stock: Stock) -> Self {
        Self {
            available: stock.available,
            min_stock: stock.min_stock,
        }
    }
}

impl From<StockDto> for Stock {
    fn from(dto: StockDto) -> Self {
        Stock::new(dto.available, dto.min_stock)
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Internal SKU-style reference
    #[oai(skip_serializing_if_is_none)]
    pub reference: Option<String>,
    /// Tax-inclusive price
    pub price: f64,
    /// Tax-exclusive price
    pub price_excl_tax: f64,
    /// Category path, e.g. "habitacion/cunas"
    pub category: String,
    /// Brand name
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Image URLs
    pub images: Vec<String>,
    /// Stock counters
    pub stock: StockDto,
    /// Catalog status
    pub status: ProductStatusDto,
    /// Whether the product is featured on the home page
    pub featured: bool,
}

impl From<ProductRequest> for NewProductProps {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            reference: request.reference,
            price: request.price,
            price_excl_tax: request.price_excl_tax,
            category: request.category,
            brand: request.brand,
            images: request.images,
            stock: request.stock.into(),
            status: request.status.into(),
            featured: request.featured,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Internal SKU-style reference
    #[oai(skip_serializing_if_is_none)]
    pub reference: Option<String>,
    /// Tax-inclusive price
    pub price: f64,
    /// Tax-exclusive price
    pub price_excl_tax: f64,
    /// Category path
    pub category: String,
    /// Brand name
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Image URLs
    pub images: Vec<String>,
    /// Stock counters
    pub stock: StockDto,
    /// Catalog status
    pub status: ProductStatusDto,
    /// Whether the product is featured on the home page
    pub featured: bool,
    /// Accumulated number of units sold
    pub sales_count: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            reference: product.reference,
            price: product.price,
            price_excl_tax: product.price_excl_tax,
            category: product.category,
            brand: product.brand,
            images: product.images,
            stock: product.stock.into(),
            status: product.status.into(),
            featured: product.featured,
            sales_count: product.sales_count,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One catalog page plus the total row count for the query.
#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}
