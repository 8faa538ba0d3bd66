use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Active => write!(f, "active"),
            ProductStatus::Inactive => write!(f, "inactive"),
            ProductStatus::Discontinued => write!(f, "discontinued"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            "discontinued" => Ok(ProductStatus::Discontinued),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

/// Stock counters. `min_stock` is the replenishment threshold shown to admins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub available: i32,
    pub min_stock: i32,
}

impl Stock {
    pub fn new(available: i32, min_stock: i32) -> Self {
        Self {
            available,
            min_stock,
        }
    }

    pub fn is_low(&self) -> bool {
        self.available <= self.min_stock
    }
}

/// Catalog list filters. All fields combine with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Matches the category path by prefix, e.g. "textil/sabanas".
    pub category: Option<String>,
    pub brand: Option<String>,
    pub status: Option<ProductStatus>,
    pub featured: Option<bool>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
}
