use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AccountError;
use crate::domain::user::model::User;
use crate::domain::user::service::AccountService;
use crate::domain::user::session::SessionStore;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub accounts: Arc<dyn AccountService>,
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, AccountError> {
        params.credentials.validate()?;

        self.logger
            .info(&format!("Signing in as {}", params.credentials.login));

        let user = self
            .accounts
            .login(&params.credentials)
            .await
            .map_err(|e| match e {
                RemoteError::EmptyBody => AccountError::InvalidCredentials,
                other => {
                    self.logger.warn(&format!("Sign-in failed: {:?}", other));
                    AccountError::from_remote(other)
                }
            })?;

        self.session.save_user(&user).await?;
        self.logger.info(&format!("Signed in as user {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SessionError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::{Credentials, ProfileUpdate, Registration};
    use crate::domain::user::session::SessionProvider;
    use mockall::mock;

    mock! {
        pub Accounts {}

        #[async_trait]
        impl AccountService for Accounts {
            async fn login(&self, credentials: &Credentials) -> Result<User, RemoteError>;
            async fn register(&self, registration: &Registration) -> Result<UserId, RemoteError>;
            async fn get_user(&self, id: UserId) -> Result<User, RemoteError>;
            async fn update_user(&self, id: UserId, update: &ProfileUpdate) -> Result<User, RemoteError>;
        }
    }

    mock! {
        pub Session {}

        impl SessionProvider for Session {
            fn current_user_id(&self) -> Option<UserId>;
        }

        #[async_trait]
        impl SessionStore for Session {
            fn current_user(&self) -> Option<User>;
            async fn save_user(&self, user: &User) -> Result<(), SessionError>;
            async fn clear(&self) -> Result<(), SessionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn ivan() -> User {
        User {
            id: UserId::new(5).unwrap(),
            login: "ivan".to_string(),
            password: "secret".to_string(),
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: None,
            photo: None,
        }
    }

    fn params(login: &str, password: &str) -> LoginParams {
        LoginParams {
            credentials: Credentials {
                login: login.to_string(),
                password: password.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn should_sign_in_and_save_session() {
        let mut accounts = MockAccounts::new();
        accounts
            .expect_login()
            .withf(|c| c.login == "ivan" && c.password == "secret")
            .returning(|_| Ok(ivan()));
        let mut session = MockSession::new();
        session
            .expect_save_user()
            .withf(|user| user.id.value() == 5)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let user = use_case.execute(params("ivan", "secret")).await.unwrap();
        assert_eq!(user, ivan());
    }

    #[tokio::test]
    async fn should_reject_empty_fields_without_calling_server() {
        let mut accounts = MockAccounts::new();
        accounts.expect_login().never();
        let session = MockSession::new();

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", "secret")).await;
        assert_eq!(result.unwrap_err(), AccountError::MissingFields);
    }

    #[tokio::test]
    async fn should_report_invalid_credentials_on_empty_answer() {
        let mut accounts = MockAccounts::new();
        accounts
            .expect_login()
            .returning(|_| Err(RemoteError::EmptyBody));
        let mut session = MockSession::new();
        session.expect_save_user().never();

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("ivan", "wrong")).await;
        assert_eq!(result.unwrap_err(), AccountError::InvalidCredentials);
    }

    #[tokio::test]
    async fn should_pass_server_explanation_through() {
        let mut accounts = MockAccounts::new();
        accounts.expect_login().returning(|_| {
            Err(RemoteError::Status {
                code: 401,
                body: Some("Неверный пароль".to_string()),
            })
        });
        let session = MockSession::new();

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let error = use_case.execute(params("ivan", "wrong")).await.unwrap_err();
        assert_eq!(error.user_message(), "Неверный пароль");
    }
}
