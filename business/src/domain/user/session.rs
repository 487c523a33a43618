use async_trait::async_trait;

use crate::domain::errors::SessionError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

/// Supplies the currently authenticated user, if any.
pub trait SessionProvider: Send + Sync {
    fn current_user_id(&self) -> Option<UserId>;
}

/// On-device storage of the signed-in user.
#[async_trait]
pub trait SessionStore: SessionProvider {
    fn current_user(&self) -> Option<User>;
    async fn save_user(&self, user: &User) -> Result<(), SessionError>;
    async fn clear(&self) -> Result<(), SessionError>;
}
