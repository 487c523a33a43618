use crate::domain::errors::RemoteError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasketError {
    #[error("basket.not_authenticated")]
    NotAuthenticated,
    #[error("basket.invalid_quantity")]
    InvalidQuantity,
    #[error("basket.already_in_basket")]
    AlreadyInBasket,
    #[error("basket.load_failed")]
    LoadFailed(RemoteError),
    #[error("basket.add_failed")]
    AddFailed(RemoteError),
    #[error("basket.remove_failed")]
    RemoveFailed(RemoteError),
}

impl BasketError {
    /// Remote failure behind this error, if any.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            BasketError::LoadFailed(e) | BasketError::AddFailed(e) | BasketError::RemoveFailed(e) => {
                Some(e)
            }
            _ => None,
        }
    }

    /// Text shown to the shopper.
    pub fn user_message(&self) -> String {
        if let Some(RemoteError::Transport(detail)) = self.remote() {
            return format!("Network error: {}", detail);
        }

        match self {
            BasketError::NotAuthenticated => "Sign in to use the basket".to_string(),
            BasketError::InvalidQuantity => "Invalid basket quantity".to_string(),
            BasketError::AlreadyInBasket => "This product is already in your basket".to_string(),
            BasketError::LoadFailed(_) => "Failed to load the basket".to_string(),
            BasketError::AddFailed(_) => "Failed to add to the basket".to_string(),
            BasketError::RemoveFailed(_) => "Failed to remove from the basket".to_string(),
        }
    }
}
