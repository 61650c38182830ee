//! Repository for the `brands` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::catalog::{Brand, CreateBrand};

const COLUMNS: &str = "id, brand_name, created_at, updated_at";

/// Provides create/read operations for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// Insert a new brand, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBrand) -> Result<Brand, sqlx::Error> {
        let query = format!("INSERT INTO brands (brand_name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Brand>(&query)
            .bind(&input.brand_name)
            .fetch_one(pool)
            .await
    }

    /// Find a brand by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
