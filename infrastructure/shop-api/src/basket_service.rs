use async_trait::async_trait;

use business::domain::basket::model::BasketLine;
use business::domain::basket::service::BasketService;
use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::{ProductId, UserId};

use crate::client::ShopApiClient;
use crate::dto::BasketLineDto;
use crate::response::{json_body, send};

/// Text the backend puts in the error body when the product is already in the basket.
const DUPLICATE_ITEM_MARKER: &str = "Товар уже в корзине";

pub struct BasketServiceHttp {
    client: ShopApiClient,
}

impl BasketServiceHttp {
    pub fn new(client: ShopApiClient) -> Self {
        Self { client }
    }

    /// Maps the backend's duplicate-entry answer to `RemoteError::AlreadyInBasket`.
    fn classify_add_failure(error: RemoteError) -> RemoteError {
        match &error {
            RemoteError::Status { code: 409, .. } => RemoteError::AlreadyInBasket,
            RemoteError::Status {
                body: Some(body), ..
            } if body.contains(DUPLICATE_ITEM_MARKER) => RemoteError::AlreadyInBasket,
            _ => error,
        }
    }
}

#[async_trait]
impl BasketService for BasketServiceHttp {
    async fn get_all(&self, user_id: UserId) -> Result<Vec<BasketLine>, RemoteError> {
        let response = send(
            self.client
                .client
                .get(self.client.basket_list_url())
                .query(&[("user_id", user_id.value())]),
        )
        .await?;

        let dtos: Vec<BasketLineDto> = json_body(response).await?;
        dtos.into_iter().map(BasketLineDto::into_domain).collect()
    }

    async fn add(&self, user_id: UserId, product_id: ProductId) -> Result<(), RemoteError> {
        send(
            self.client
                .client
                .post(self.client.basket_add_url())
                .query(&[
                    ("user_id", user_id.value()),
                    ("product_id", product_id.value()),
                ]),
        )
        .await
        .map_err(Self::classify_add_failure)?;

        Ok(())
    }

    async fn remove(&self, user_id: UserId, product_id: ProductId) -> Result<(), RemoteError> {
        send(
            self.client
                .client
                .delete(self.client.basket_delete_url())
                .query(&[
                    ("user_id", user_id.value()),
                    ("product_id", product_id.value()),
                ]),
        )
        .await?;

        Ok(())
    }
}
