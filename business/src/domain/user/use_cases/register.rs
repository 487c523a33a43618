use async_trait::async_trait;

use crate::domain::user::errors::AccountError;
use crate::domain::user::model::{Registration, User};

pub struct RegisterParams {
    pub registration: Registration,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<User, AccountError>;
}
