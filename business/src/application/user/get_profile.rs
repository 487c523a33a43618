use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AccountError;
use crate::domain::user::model::User;
use crate::domain::user::service::AccountService;
use crate::domain::user::session::SessionStore;
use crate::domain::user::use_cases::get_profile::GetProfileUseCase;

/// Refreshes the signed-in user's profile from the server and stores it.
pub struct GetProfileUseCaseImpl {
    pub accounts: Arc<dyn AccountService>,
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self) -> Result<User, AccountError> {
        let user_id = self
            .session
            .current_user_id()
            .ok_or(AccountError::NotAuthenticated)?;

        self.logger
            .info(&format!("Fetching profile of user {}", user_id));

        let user = self.accounts.get_user(user_id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch profile {}: {:?}", user_id, e));
            AccountError::Remote(e)
        })?;

        self.session.save_user(&user).await?;
        Ok(user)
    }
}
