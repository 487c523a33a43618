use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Credentials, ProfileUpdate, Registration, User};

/// Remote account operations of the shop backend.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User, RemoteError>;
    /// Returns the id assigned to the new account.
    async fn register(&self, registration: &Registration) -> Result<UserId, RemoteError>;
    async fn get_user(&self, id: UserId) -> Result<User, RemoteError>;
    async fn update_user(&self, id: UserId, update: &ProfileUpdate) -> Result<User, RemoteError>;
}
