use async_trait::async_trait;

use crate::domain::user::errors::AccountError;
use crate::domain::user::model::{Credentials, User};

pub struct LoginParams {
    pub credentials: Credentials,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<User, AccountError>;
}
