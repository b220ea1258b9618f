use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{error::AppResult, seed, AppState};

#[derive(Debug, Deserialize)]
pub struct SeedParams {
    pub count: Option<usize>,
}

/// Dev-only helper: populate the store with sample products.
pub async fn seed_data(
    State(state): State<AppState>,
    Query(params): Query<SeedParams>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let count = params.count.unwrap_or(10).min(10_000);
    let seeded = seed::seed_products(state.store.as_ref(), count).await?;

    info!(count = seeded.len(), "Seeded products");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "seeded": seeded.len(),
            "data": seeded,
        })),
    ))
}
