use std::time::Duration;

use reqwest::Client;
use url::Url;

/// Shared HTTP client configuration for the shop backend.
#[derive(Clone)]
pub struct ShopApiClient {
    pub client: Client,
    base_url: String,
}

impl ShopApiClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/v1/", self.base_url)
    }

    pub fn product_url(&self, product_id: i64) -> String {
        format!("{}/v1/{}", self.base_url, product_id)
    }

    pub fn token_url(&self) -> String {
        format!("{}/v1/token", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/v1/register", self.base_url)
    }

    pub fn user_url(&self, user_id: i64) -> String {
        format!("{}/v1/users/{}", self.base_url, user_id)
    }

    pub fn basket_list_url(&self) -> String {
        format!("{}/v1/basket/get_all_basket", self.base_url)
    }

    pub fn basket_add_url(&self) -> String {
        format!("{}/v1/basket/add_to_basket", self.base_url)
    }

    pub fn basket_delete_url(&self) -> String {
        format!("{}/v1/basket/delete_from_basket", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ShopApiClient {
        ShopApiClient::new(&Url::parse(base).unwrap(), Duration::from_secs(5))
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        assert_eq!(client("http://127.0.0.1:1211/").base_url(), "http://127.0.0.1:1211");
    }

    #[test]
    fn should_build_catalog_urls() {
        let api = client("http://shop.local:1211");
        assert_eq!(api.products_url(), "http://shop.local:1211/v1/");
        assert_eq!(api.product_url(42), "http://shop.local:1211/v1/42");
    }

    #[test]
    fn should_build_account_urls() {
        let api = client("http://shop.local:1211");
        assert_eq!(api.token_url(), "http://shop.local:1211/v1/token");
        assert_eq!(api.register_url(), "http://shop.local:1211/v1/register");
        assert_eq!(api.user_url(5), "http://shop.local:1211/v1/users/5");
    }

    #[test]
    fn should_build_basket_urls() {
        let api = client("http://shop.local:1211");
        assert_eq!(
            api.basket_list_url(),
            "http://shop.local:1211/v1/basket/get_all_basket"
        );
        assert_eq!(
            api.basket_add_url(),
            "http://shop.local:1211/v1/basket/add_to_basket"
        );
        assert_eq!(
            api.basket_delete_url(),
            "http://shop.local:1211/v1/basket/delete_from_basket"
        );
    }
}
