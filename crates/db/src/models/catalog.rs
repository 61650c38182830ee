//! Catalog entity models: products, categories and brands.
//!
//! These tables are managed outside this service; the models exist so images
//! can reference products and listings can embed their relations.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

use crate::models::owner::OwnerSummary;

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub product_name: String,
    pub description: Option<String>,
    pub price_per_piece: f64,
    pub stock: i32,
    pub brand_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub product_name: String,
    pub description: Option<String>,
    pub price_per_piece: Option<f64>,
    pub stock: Option<i32>,
    pub brand_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub category_name: String,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub category_name: String,
    pub owner_id: Option<DbId>,
}

/// Category as embedded under a product, with its owner when one is set.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub id: DbId,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerSummary>,
}

// ---------------------------------------------------------------------------
// Brand
// ---------------------------------------------------------------------------

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub brand_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new brand.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrand {
    pub brand_name: String,
}

/// Brand as embedded under a product.
#[derive(Debug, Clone, Serialize)]
pub struct BrandSummary {
    pub id: DbId,
    pub brand_name: String,
}
