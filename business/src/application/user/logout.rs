use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AccountError;
use crate::domain::user::session::SessionStore;
use crate::domain::user::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), AccountError> {
        match self.session.current_user_id() {
            Some(user_id) => self.logger.info(&format!("Signing out user {}", user_id)),
            None => self.logger.debug("Sign-out requested with no active session"),
        }
        self.session.clear().await?;
        Ok(())
    }
}
