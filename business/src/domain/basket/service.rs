use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::{ProductId, UserId};

use super::model::BasketLine;

/// Remote source of truth for a user's basket.
///
/// `add` reports a duplicate entry as `RemoteError::AlreadyInBasket`.
#[async_trait]
pub trait BasketService: Send + Sync {
    async fn get_all(&self, user_id: UserId) -> Result<Vec<BasketLine>, RemoteError>;
    async fn add(&self, user_id: UserId, product_id: ProductId) -> Result<(), RemoteError>;
    async fn remove(&self, user_id: UserId, product_id: ProductId) -> Result<(), RemoteError>;
}
