use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductFilters;
use business::domain::shared::value_objects::{Page, PageRequest};

use super::entity::ProductEntity;

const COLUMNS: &str = "id, name, reference, price, price_excl_tax, category, brand, images, \
     stock_available, min_stock, status, featured, sales_count, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// All filters combine with AND. Category matches the path itself or any
/// subcategory under it.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &ProductFilters) {
    builder.push(" WHERE TRUE");
    if let Some(category) = &filters.category {
        builder
            .push(" AND (category = ")
            .push_bind(category.clone())
            .push(" OR category LIKE ")
            .push_bind(format!("{category}/%"))
            .push(")");
    }
    if let Some(brand) = &filters.brand {
        builder.push(" AND brand = ").push_bind(brand.clone());
    }
    if let Some(status) = &filters.status {
        builder.push(" AND status = ").push_bind(status.to_string());
    }
    if let Some(featured) = filters.featured {
        builder.push(" AND featured = ").push_bind(featured);
    }
    if let Some(search) = &filters.search {
        builder
            .push(" AND name ILIKE ")
            .push_bind(format!("%{search}%"));
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_page(
        &self,
        filters: &ProductFilters,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
        push_filters(&mut count_builder, filters);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Counting products failed: {e}");
                RepositoryError::DatabaseError
            })?;

        let mut builder = QueryBuilder::new(format!("SELECT {COLUMNS} FROM products"));
        push_filters(&mut builder, filters);
        builder
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(i64::from(page.per_page()))
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        let entities: Vec<ProductEntity> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Listing products failed: {e}");
                RepositoryError::DatabaseError
            })?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            total as u64,
            page,
        ))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, reference, price, price_excl_tax, category, brand, images, stock_available, min_stock, status, featured, sales_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                reference = EXCLUDED.reference,
                price = EXCLUDED.price,
                price_excl_tax = EXCLUDED.price_excl_tax,
                category = EXCLUDED.category,
                brand = EXCLUDED.brand,
                images = EXCLUDED.images,
                stock_available = EXCLUDED.stock_available,
                min_stock = EXCLUDED.min_stock,
                status = EXCLUDED.status,
                featured = EXCLUDED.featured,
                sales_count = EXCLUDED.sales_count,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.reference)
        .bind(product.price)
        .bind(product.price_excl_tax)
        .bind(&product.category)
        .bind(&product.brand)
        .bind(Json(&product.images))
        .bind(product.stock.available)
        .bind(product.stock.min_stock)
        .bind(product.status.to_string())
        .bind(product.featured)
        .bind(product.sales_count)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.code().as_deref() == Some("23505"))
            {
                RepositoryError::Duplicated
            } else {
                tracing::error!("Saving product failed: {e}");
                RepositoryError::DatabaseError
            }
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
