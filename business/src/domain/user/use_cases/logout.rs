use async_trait::async_trait;

use crate::domain::user::errors::AccountError;

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), AccountError>;
}
