//! Image entity model, DTOs and the nested product listing aggregate.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

use crate::models::catalog::{BrandSummary, CategorySummary};
use crate::models::owner::OwnerSummary;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub file_path: String,
    pub product_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new image row.
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub product_id: DbId,
    pub file_path: String,
}

// ---------------------------------------------------------------------------
// Nested listing
// ---------------------------------------------------------------------------

/// An image together with its product and the product's relations.
#[derive(Debug, Clone, Serialize)]
pub struct ImageWithProduct {
    pub id: DbId,
    pub file_path: String,
    pub product_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub product: ProductDetail,
}

/// Product fields embedded in [`ImageWithProduct`].
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: DbId,
    pub product_name: String,
    pub description: Option<String>,
    pub price_per_piece: f64,
    pub stock: i32,
    pub brand_id: Option<DbId>,
    pub category_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandSummary>,
}

/// Flat row produced by the image/product/category/owner/brand join.
///
/// Columns from LEFT JOINed tables are optional; a relation is only
/// materialized when its key column is present.
#[derive(Debug, Clone, FromRow)]
pub struct ImageProductRow {
    pub id: DbId,
    pub file_path: String,
    pub product_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub product_name: String,
    pub description: Option<String>,
    pub price_per_piece: f64,
    pub stock: i32,
    pub brand_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub joined_category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub owner_id: Option<DbId>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_profile_path: Option<String>,
    pub joined_brand_id: Option<DbId>,
    pub brand_name: Option<String>,
}

impl From<ImageProductRow> for ImageWithProduct {
    fn from(row: ImageProductRow) -> Self {
        let owner = match (
            row.owner_id,
            row.owner_first_name,
            row.owner_last_name,
            row.owner_email,
        ) {
            (Some(id), Some(first_name), Some(last_name), Some(email)) => Some(OwnerSummary {
                id,
                first_name,
                last_name,
                email,
                profile_path: row.owner_profile_path,
            }),
            _ => None,
        };

        let category = match (row.joined_category_id, row.category_name) {
            (Some(id), Some(category_name)) => Some(CategorySummary {
                id,
                category_name,
                owner,
            }),
            _ => None,
        };

        let brand = match (row.joined_brand_id, row.brand_name) {
            (Some(id), Some(brand_name)) => Some(BrandSummary { id, brand_name }),
            _ => None,
        };

        Self {
            id: row.id,
            file_path: row.file_path,
            product_id: row.product_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            product: ProductDetail {
                id: row.product_id,
                product_name: row.product_name,
                description: row.description,
                price_per_piece: row.price_per_piece,
                stock: row.stock,
                brand_id: row.brand_id,
                category_id: row.category_id,
                category,
                brand,
            },
        }
    }
}
