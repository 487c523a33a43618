/// Errors reported by remote service adapters (the shop REST backend).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("remote.transport")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("remote.status")]
    Status { code: u16, body: Option<String> },
    #[error("remote.empty_body")]
    EmptyBody,
    #[error("remote.malformed")]
    Malformed(String),
    /// The product is already part of the user's basket.
    #[error("remote.already_in_basket")]
    AlreadyInBasket,
}

impl RemoteError {
    pub fn transport(detail: impl Into<String>) -> Self {
        RemoteError::Transport(detail.into())
    }
    pub fn status(code: u16) -> Self {
        RemoteError::Status { code, body: None }
    }
    pub fn malformed(detail: impl Into<String>) -> Self {
        RemoteError::Malformed(detail.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::Status { code: 404, .. })
    }

    /// Body text sent along with a non-success status, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Status {
                body: Some(body), ..
            } if !body.trim().is_empty() => Some(body.as_str()),
            _ => None,
        }
    }
}

/// Errors reported by the on-device session store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session.io")]
    Io(String),
    #[error("session.corrupt")]
    Corrupt(String),
}
