use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::Product;

use super::ProductStore;

/// Postgres-backed store. Row-level atomicity of `save` comes from each
/// statement running as its own implicit transaction.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price_cents, stock, created_at, updated_at
             FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price_cents, stock, created_at, updated_at
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET name        = EXCLUDED.name,
                price_cents = EXCLUDED.price_cents,
                stock       = EXCLUDED.stock,
                updated_at  = EXCLUDED.updated_at
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn decrement(&self, id: i64, amount: i32) -> AppResult<Option<Product>> {
        // Single conditional UPDATE: the sufficiency check and the write are
        // one statement, so concurrent decrements cannot lose updates.
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET stock      = stock - $2,
                updated_at = $3
            WHERE id = $1 AND stock >= $2
            RETURNING id, name, price_cents, stock, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
