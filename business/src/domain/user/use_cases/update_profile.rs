use async_trait::async_trait;

use crate::domain::user::errors::AccountError;
use crate::domain::user::model::{ProfileUpdate, User};

pub struct UpdateProfileParams {
    pub update: ProfileUpdate,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileParams) -> Result<User, AccountError>;
}
