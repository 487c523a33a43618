use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AccountError;
use crate::domain::user::model::User;
use crate::domain::user::service::AccountService;
use crate::domain::user::session::SessionStore;
use crate::domain::user::use_cases::update_profile::{UpdateProfileParams, UpdateProfileUseCase};

pub struct UpdateProfileUseCaseImpl {
    pub accounts: Arc<dyn AccountService>,
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, params: UpdateProfileParams) -> Result<User, AccountError> {
        let user_id = self
            .session
            .current_user_id()
            .ok_or(AccountError::NotAuthenticated)?;
        params.update.validate()?;

        self.logger.info(&format!(
            "Updating profile of user {} (photo: {})",
            user_id,
            params.update.photo_path.is_some()
        ));

        let user = self
            .accounts
            .update_user(user_id, &params.update)
            .await
            .map_err(AccountError::from_remote)?;

        self.session.save_user(&user).await?;
        self.logger.info(&format!("Profile of user {} updated", user.id));
        Ok(user)
    }
}
