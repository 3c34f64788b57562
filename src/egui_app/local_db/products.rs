//! # Local Product Store
//!
//! The whole catalog lives under one key as a JSON array. Every operation
//! loads the full collection; mutations rewrite it in full.
//!
//! Mutations from every clone of a `ProductStore` go through one writer
//! lock held across the read-modify-write cycle, so two screens saving and
//! deleting at the same time cannot drop each other's change. Reads and the
//! duplicate check take no lock.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::egui_app::local_db::{LocalDatabase, Result};
use crate::shared::{Product, StorageError};

/// Storage key of the serialized product collection
pub const PRODUCTS_KEY: &str = "products";

/// Storage facade over the product collection
#[derive(Debug, Clone)]
pub struct ProductStore {
    db: LocalDatabase,
    writer: Arc<Mutex<()>>,
}

impl ProductStore {
    pub fn new(db: LocalDatabase) -> Self {
        Self {
            db,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Full collection in insertion order; empty when nothing was stored yet
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        match self.db.get_item(PRODUCTS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::warn!(error = %e, "Stored product collection is corrupt");
                StorageError::corrupt(PRODUCTS_KEY, e)
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Append `product` and rewrite the collection. Performs no validation.
    pub async fn save_product(&self, product: Product) -> Result<()> {
        let _guard = self.writer.lock().await;
        let mut products = self.list_products().await?;
        tracing::debug!(id = product.id, name = %product.name, "Saving product");
        products.push(product);
        self.write_all(&products).await
    }

    /// Remove every record whose id is `id` and rewrite the collection
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let _guard = self.writer.lock().await;
        let mut products = self.list_products().await?;
        let before = products.len();
        products.retain(|p| p.id != id);
        tracing::debug!(id, removed = before - products.len(), "Deleting product");
        self.write_all(&products).await
    }

    /// Case-sensitive exact name match against the stored collection
    pub async fn is_duplicate(&self, name: &str) -> Result<bool> {
        let products = self.list_products().await?;
        Ok(products.iter().any(|p| p.name == name))
    }

    async fn write_all(&self, products: &[Product]) -> Result<()> {
        let raw = serde_json::to_string(products)?;
        self.db.set_item(PRODUCTS_KEY, &raw).await
    }

    /// Underlying key-value store
    pub fn database(&self) -> &LocalDatabase {
        &self.db
    }
}
