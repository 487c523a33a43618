use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;

/// Read-only access to the shop's product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RemoteError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RemoteError>;
}
