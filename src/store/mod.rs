use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Product;

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// The persistence seam. One record per product, keyed by identifier.
///
/// Per-record read-modify-write atomicity is the store's responsibility;
/// the catalog layer performs a single read-validate-write per call and
/// holds no state across calls.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ordered by identifier.
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Fetch one product, `None` if the identifier is unknown.
    async fn get(&self, id: i64) -> AppResult<Option<Product>>;

    /// Persist the record, inserting or overwriting by identifier.
    async fn save(&self, product: &Product) -> AppResult<()>;

    /// Atomically subtract `amount` from the product's stock when at least
    /// that much is available, refreshing `updated_at`. Returns the updated
    /// record, or `None` when nothing matched (unknown identifier or
    /// insufficient stock) — the store is left unmodified in that case.
    async fn decrement(&self, id: i64, amount: i32) -> AppResult<Option<Product>>;
}
