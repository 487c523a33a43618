use async_trait::async_trait;

use crate::domain::user::errors::AccountError;
use crate::domain::user::model::User;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<User, AccountError>;
}
