use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{Product, StockLevel, UpdateProduct};
use crate::store::ProductStore;

/// The product catalog: list, get, update, and stock decrement over a
/// [`ProductStore`]. Each operation is a single read-validate-write with no
/// state held between calls.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn ProductStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.store.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    /// Overwrite the mutable fields of an existing product. Identifier and
    /// creation timestamp are untouched.
    pub async fn update(&self, id: i64, payload: UpdateProduct) -> AppResult<Product> {
        if payload.name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }
        if payload.price_cents < 0 {
            return Err(AppError::BadRequest("price_cents must be >= 0".to_string()));
        }
        if payload.stock < 0 {
            return Err(AppError::BadRequest("stock must be >= 0".to_string()));
        }

        let mut product = self.get(id).await?;
        product.name = payload.name;
        product.price_cents = payload.price_cents;
        product.stock = payload.stock;
        product.updated_at = Utc::now();

        self.store.save(&product).await?;
        Ok(product)
    }

    /// Subtract `amount` from the product's stock. Stock can never go
    /// negative: the store applies the sufficiency check and the write as
    /// one atomic step, and an oversized decrement leaves it untouched.
    pub async fn decrement_stock(&self, id: i64, amount: i32) -> AppResult<StockLevel> {
        if amount <= 0 {
            return Err(AppError::BadRequest("amount must be > 0".to_string()));
        }

        match self.store.decrement(id, amount).await? {
            Some(product) => Ok(StockLevel {
                id: product.id,
                stock: product.stock,
            }),
            // Nothing matched: distinguish a missing record from a stock
            // shortfall with a plain read.
            None => match self.store.get(id).await? {
                Some(_) => Err(AppError::InsufficientStock),
                None => Err(AppError::NotFound),
            },
        }
    }
}
