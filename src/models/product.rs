use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core catalog entity. Identifiers are caller-assigned integers and never
/// change after creation; `created_at`/`updated_at` are maintained by the
/// service (every mutation refreshes `updated_at`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price stored as integer cents (e.g. 999 = $9.99)
    pub price_cents: i64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Full replacement of a product's mutable fields. All fields are required;
/// partial updates are not part of the contract.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    /// Price in cents
    pub price_cents: i64,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct DecrementStock {
    pub amount: i32,
}

// ── Response shapes ───────────────────────────────────────────────────────────

/// Result of a successful stock decrement.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StockLevel {
    pub id: i64,
    pub stock: i32,
}
