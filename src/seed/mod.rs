use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::AppResult;
use crate::models::Product;
use crate::store::ProductStore;

static ADJECTIVES: &[&str] = &[
    "Premium", "Deluxe", "Ultra", "Pro", "Classic", "Elite", "Smart", "Eco",
    "Compact", "Portable", "Heavy-Duty", "Lightweight", "Advanced", "Basic",
    "Professional", "Essential", "Signature", "Standard", "Plus", "Turbo",
];

static NOUNS: &[&str] = &[
    "Widget", "Gadget", "Device", "Module", "Unit", "Component", "System",
    "Kit", "Set", "Pack", "Bundle", "Console", "Panel", "Sensor", "Adapter",
    "Monitor", "Scanner", "Receiver", "Amplifier", "Converter",
];

/// Generate a random product name using adjective + noun + serial suffix.
fn random_product_name(rng: &mut impl Rng, serial: i64) -> String {
    let adj = ADJECTIVES.choose(rng).unwrap_or(&"Standard");
    let noun = NOUNS.choose(rng).unwrap_or(&"Widget");
    format!("{} {} #{:05}", adj, noun, serial)
}

/// Seed the store with `count` sample products. Identifiers continue from
/// the highest one already present, so repeated seeding never overwrites.
pub async fn seed_products(store: &dyn ProductStore, count: usize) -> AppResult<Vec<Product>> {
    info!("Seeding {} products...", count);

    // StdRng is Send + Sync — safe to hold across async await points
    let mut rng = StdRng::from_entropy();

    let next_id = store
        .list()
        .await?
        .last()
        .map(|p| p.id + 1)
        .unwrap_or(100_001);

    let mut seeded = Vec::with_capacity(count);
    let now = Utc::now();

    for offset in 0..count as i64 {
        let id = next_id + offset;
        let product = Product {
            id,
            name: random_product_name(&mut rng, id),
            price_cents: rng.gen_range(99..=999_99), // $0.99 – $999.99
            stock: rng.gen_range(0..=500),
            created_at: now,
            updated_at: now,
        };
        store.save(&product).await?;
        seeded.push(product);
    }

    info!("Seeding complete. Total new: {} products", seeded.len());
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeds_requested_count_with_valid_fields() {
        let store = Arc::new(MemoryStore::default());
        let seeded = seed_products(store.as_ref(), 25).await.unwrap();

        assert_eq!(seeded.len(), 25);
        assert_eq!(store.list().await.unwrap().len(), 25);
        for product in &seeded {
            assert!(!product.name.is_empty());
            assert!(product.price_cents >= 0);
            assert!(product.stock >= 0);
        }
    }

    #[tokio::test]
    async fn repeated_seeding_continues_ids() {
        let store = Arc::new(MemoryStore::default());
        seed_products(store.as_ref(), 5).await.unwrap();
        seed_products(store.as_ref(), 5).await.unwrap();

        // No overwrites: ten distinct records.
        assert_eq!(store.list().await.unwrap().len(), 10);
    }
}
