use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AccountError;
use crate::domain::user::model::User;
use crate::domain::user::service::AccountService;
use crate::domain::user::session::SessionStore;
use crate::domain::user::use_cases::register::{RegisterParams, RegisterUseCase};

pub struct RegisterUseCaseImpl {
    pub accounts: Arc<dyn AccountService>,
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<User, AccountError> {
        let registration = params.registration;
        registration.validate()?;

        self.logger
            .info(&format!("Registering account {}", registration.login));

        let id = self
            .accounts
            .register(&registration)
            .await
            .map_err(AccountError::from_remote)?;

        // The backend only answers with the new id; the rest is what was submitted.
        let user = User {
            id,
            patronymic: registration.patronymic(),
            login: registration.login,
            password: registration.password,
            name: registration.name,
            surname: registration.surname,
            photo: None,
        };

        self.session.save_user(&user).await?;
        self.logger.info(&format!("Registered user {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{RemoteError, SessionError};
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

    fn registration() -> Registration {
        Registration {
            login: "olga".to_string(),
            password: "pa55".to_string(),
            name: "Olga".to_string(),
            surname: "Smirnova".to_string(),
            patronymic: Some(String::new()),
            accepted_terms: true,
        }
    }

    #[tokio::test]
    async fn should_register_and_save_session_user() {
        let mut accounts = MockAccounts::new();
        accounts
            .expect_register()
            .returning(|_| Ok(UserId::new(12).unwrap()));
        let mut session = MockSession::new();
        session
            .expect_save_user()
            .withf(|user| user.id.value() == 12 && user.login == "olga")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RegisterUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(RegisterParams {
                registration: registration(),
            })
            .await
            .unwrap();

        assert_eq!(user.id.value(), 12);
        assert_eq!(user.surname, "Smirnova");
        assert!(user.patronymic.is_none());
        assert!(user.photo.is_none());
    }

    #[tokio::test]
    async fn should_require_terms_acceptance() {
        let mut accounts = MockAccounts::new();
        accounts.expect_register().never();

        let use_case = RegisterUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(MockSession::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterParams {
                registration: Registration {
                    accepted_terms: false,
                    ..registration()
                },
            })
            .await;

        assert_eq!(result.unwrap_err(), AccountError::TermsNotAccepted);
    }

    #[tokio::test]
    async fn should_not_save_session_when_server_rejects() {
        let mut accounts = MockAccounts::new();
        accounts.expect_register().returning(|_| {
            Err(RemoteError::Status {
                code: 400,
                body: Some("Логин уже занят".to_string()),
            })
        });
        let mut session = MockSession::new();
        session.expect_save_user().never();

        let use_case = RegisterUseCaseImpl {
            accounts: Arc::new(accounts),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterParams {
                registration: registration(),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            AccountError::Rejected(Some("Логин уже занят".to_string()))
        );
    }
}
