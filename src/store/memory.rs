use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::Product;

use super::ProductStore;

/// In-memory store satisfying the same contract as [`PgStore`]. Backs the
/// unit tests and local runs without a database. BTreeMap keeps iteration
/// ordered by identifier, matching the Postgres `ORDER BY id`.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<i64, Product>>,
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        self.records
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(())
    }

    async fn decrement(&self, id: i64, amount: i32) -> AppResult<Option<Product>> {
        // Check and mutate under one write lock, mirroring the conditional
        // UPDATE the Postgres store runs.
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(product) if product.stock >= amount => {
                product.stock -= amount;
                product.updated_at = Utc::now();
                Ok(Some(product.clone()))
            }
            _ => Ok(None),
        }
    }
}
