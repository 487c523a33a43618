use crate::domain::errors::{RemoteError, SessionError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("account.missing_fields")]
    MissingFields,
    #[error("account.terms_not_accepted")]
    TermsNotAccepted,
    #[error("account.invalid_credentials")]
    InvalidCredentials,
    #[error("account.not_authenticated")]
    NotAuthenticated,
    /// The server refused the request; carries its explanation when it sent one.
    #[error("account.rejected")]
    Rejected(Option<String>),
    #[error("remote.request_failed")]
    Remote(#[from] RemoteError),
    #[error("session.failure")]
    Session(#[from] SessionError),
}

impl AccountError {
    /// Converts a failed remote call, keeping the server's explanation for 4xx answers.
    pub fn from_remote(error: RemoteError) -> Self {
        match &error {
            RemoteError::Status { code, .. } if (400..500).contains(code) => {
                AccountError::Rejected(error.server_message().map(str::to_string))
            }
            _ => AccountError::Remote(error),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AccountError::MissingFields => "Fill in all required fields".to_string(),
            AccountError::TermsNotAccepted => "Accept the terms of service".to_string(),
            AccountError::InvalidCredentials => "Wrong login or password".to_string(),
            AccountError::NotAuthenticated => "User is not signed in".to_string(),
            AccountError::Rejected(Some(message)) => message.clone(),
            AccountError::Rejected(None) => "The server rejected the request".to_string(),
            AccountError::Remote(RemoteError::Transport(detail)) => {
                format!("Network error: {}", detail)
            }
            AccountError::Remote(RemoteError::Status { code, .. }) => {
                format!("Request failed: {}", code)
            }
            AccountError::Remote(RemoteError::EmptyBody) => {
                "Empty response from server".to_string()
            }
            AccountError::Remote(_) => "Unexpected response from server".to_string(),
            AccountError::Session(_) => "Could not access the saved session".to_string(),
        }
    }
}
