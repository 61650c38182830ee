//! Route definitions for product images.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Image routes.
///
/// `/image/{id}` takes a product id on POST and an image id on PUT. Upload
/// routes accept bodies up to `max_upload_bytes`.
///
/// ```text
/// GET    /images               -> list_images
/// GET    /images/{product_id}  -> list_product_images
/// POST   /image/{product_id}   -> create_images
/// PUT    /image/{image_id}     -> update_image
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    let uploads = Router::new()
        .route(
            "/image/{id}",
            post(image::create_images).put(image::update_image),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .route("/images", get(image::list_images))
        .route("/images/{product_id}", get(image::list_product_images))
        .merge(uploads)
}
