use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    models::{DecrementStock, Product, StockLevel, UpdateProduct},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    let products = state.catalog.list().await?;

    info!(count = products.len(), "Listed products");

    Ok((StatusCode::OK, Json(products)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.catalog.get(id).await?;

    info!(id, "Fetched product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.catalog.update(id, payload).await?;

    info!(id, name = %product.name, "Updated product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Decrement stock ───────────────────────────────────────────────────────────

pub async fn decrement_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DecrementStock>,
) -> AppResult<(StatusCode, Json<StockLevel>)> {
    let level = state.catalog.decrement_stock(id, payload.amount).await?;

    info!(id, amount = payload.amount, stock = level.stock, "Decremented stock");

    Ok((StatusCode::OK, Json(level)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::catalog::Catalog;
    use crate::models::Product;
    use crate::store::{MemoryStore, ProductStore};
    use crate::AppState;

    async fn test_app() -> Router {
        let store = Arc::new(MemoryStore::default());
        let now = Utc::now();

        for (id, name, price_cents, stock) in [
            (343437, "Product A", 10_000, 10),
            (343438, "Product B", 100_000, 19),
        ] {
            store
                .save(&Product {
                    id,
                    name: name.to_string(),
                    price_cents,
                    stock,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        let state = AppState {
            catalog: Catalog::new(store.clone()),
            store,
        };
        crate::build_router(state)
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_returns_seeded_products() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        let products = json.as_array().unwrap();
        assert_eq!(products.len(), 2);

        let names: Vec<&str> = products
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"Product A"));
        assert!(names.contains(&"Product B"));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_404_with_fixed_message() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::get("/api/products/999999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["message"], "Product not found.");
    }

    #[tokio::test]
    async fn update_returns_payload_values() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/products/343437",
                serde_json::json!({
                    "name": "Updated Product 1",
                    "price_cents": 15000,
                    "stock": 10,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["id"], 343437);
        assert_eq!(json["name"], "Updated Product 1");
        assert_eq!(json["price_cents"], 15000);
        assert_eq!(json["stock"], 10);
    }

    #[tokio::test]
    async fn decrement_returns_updated_stock() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/products/343437/decrement",
                serde_json::json!({ "amount": 3 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["id"], 343437);
        assert_eq!(json["stock"], 7);
    }

    #[tokio::test]
    async fn oversized_decrement_returns_400_and_leaves_stock_alone() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products/343438/decrement",
                serde_json::json!({ "amount": 100 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["message"], "Insufficient stock.");

        // A get after the failed decrement sees the original stock.
        let response = app
            .oneshot(
                Request::get("/api/products/343438")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response.into_body()).await;
        assert_eq!(json["stock"], 19);
    }
}
