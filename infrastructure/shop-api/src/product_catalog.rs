use async_trait::async_trait;

use business::domain::errors::RemoteError;
use business::domain::product::catalog::ProductCatalog;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::client::ShopApiClient;
use crate::dto::ProductDto;
use crate::response::{json_body, send};

pub struct ProductCatalogHttp {
    client: ShopApiClient,
}

impl ProductCatalogHttp {
    pub fn new(client: ShopApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogHttp {
    async fn get_all(&self) -> Result<Vec<Product>, RemoteError> {
        let response = send(self.client.client.get(self.client.products_url())).await?;
        let dtos: Vec<ProductDto> = json_body(response).await?;
        dtos.into_iter().map(ProductDto::into_domain).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RemoteError> {
        let response = send(self.client.client.get(self.client.product_url(id.value()))).await?;
        let dto: ProductDto = json_body(response).await?;
        dto.into_domain()
    }
}
