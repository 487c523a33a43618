#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("remote.request_failed")]
    Remote(#[from] crate::domain::errors::RemoteError),
}

impl ProductError {
    /// Text shown to the shopper when a catalog request fails.
    pub fn user_message(&self) -> String {
        match self {
            ProductError::NotFound => "Product not found".to_string(),
            ProductError::NegativePrice => "Product data is invalid".to_string(),
            ProductError::Remote(crate::domain::errors::RemoteError::Transport(detail)) => {
                format!("Network error: {}", detail)
            }
            ProductError::Remote(crate::domain::errors::RemoteError::Status { code, .. }) => {
                format!("Failed to load products: {}", code)
            }
            ProductError::Remote(_) => "Failed to load products".to_string(),
        }
    }
}
