//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use storefront_api::auth::jwt::JwtConfig;
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_db::models::catalog::CreateProduct;
use storefront_db::models::owner::{CreateOwner, Owner};
use storefront_db::repositories::{OwnerRepo, ProductRepo};

/// Fixed multipart boundary used by [`multipart_request`].
const BOUNDARY: &str = "storefront-test-boundary";

/// Build a test `ServerConfig` rooted at `storage_root`.
pub fn test_config(storage_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_root: storage_root.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        jwt: test_jwt_config(),
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        issuer: "AuthService".to_string(),
        expiry_hours: 24,
    }
}

/// Build the full application router (same middleware stack as the binary).
pub fn build_test_app(pool: PgPool, storage_root: &Path) -> Router {
    let config = test_config(storage_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// One part of a multipart body: `(field name, optional filename, bytes)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

/// A file part.
pub fn file<'a>(name: &'a str, file_name: &'a str, data: &'a [u8]) -> Part<'a> {
    (name, Some(file_name), data)
}

/// A plain value part without a filename.
pub fn text<'a>(name: &'a str, data: &'a [u8]) -> Part<'a> {
    (name, None, data)
}

/// Send a `multipart/form-data` request built from `parts`.
pub async fn multipart_request(
    app: Router,
    method: Method,
    uri: &str,
    parts: &[Part<'_>],
) -> Response {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an owner directly, hashing `password` at the minimum bcrypt cost.
pub async fn seed_owner(pool: &PgPool, email: &str, password: &str) -> Owner {
    let password_hash = bcrypt::hash(password, 4).unwrap();
    OwnerRepo::create(
        pool,
        &CreateOwner {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password_hash,
            profile_path: None,
        },
    )
    .await
    .unwrap()
}

/// Insert a bare product and return its id.
pub async fn seed_product(pool: &PgPool, name: &str) -> i64 {
    ProductRepo::create(
        pool,
        &CreateProduct {
            product_name: name.to_string(),
            description: None,
            price_per_piece: Some(9.99),
            stock: Some(1),
            brand_id: None,
            category_id: None,
        },
    )
    .await
    .unwrap()
    .id
}
