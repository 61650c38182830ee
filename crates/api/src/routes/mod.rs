pub mod auth;
pub mod health;
pub mod image;
pub mod owner;

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use storefront_core::image_path::{IMAGES_DIR, PRODUCT_DIR};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /signin                      sign in (POST)
///
/// /owner                       list, create
/// /owner/{id}                  get
///
/// /images                      list all images
/// /images/{product_id}         list a product's images with relations
/// /images/product/...          uploaded files (static)
///
/// /image/{product_id}          upload images (POST, multipart)
/// /image/{image_id}            replace an image (PUT, multipart)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/owner", owner::router())
        .merge(image::router(config.max_upload_bytes))
        .nest_service(
            &format!("/{IMAGES_DIR}/{PRODUCT_DIR}"),
            uploaded_files(&config.storage_root),
        )
}

/// Static file service for the uploaded image tree.
fn uploaded_files(storage_root: &Path) -> ServeDir {
    ServeDir::new(storage_root.join(IMAGES_DIR).join(PRODUCT_DIR))
}
