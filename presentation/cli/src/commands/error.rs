use business::domain::basket::errors::BasketError;
use business::domain::product::errors::ProductError;
use business::domain::user::errors::AccountError;

/// Turns a domain error into the message printed to the shopper.
pub trait IntoCliError {
    fn into_cli_error(self) -> anyhow::Error;
}

impl IntoCliError for BasketError {
    fn into_cli_error(self) -> anyhow::Error {
        tracing::debug!("Basket command failed: {:?}", self);
        anyhow::anyhow!(self.user_message())
    }
}

impl IntoCliError for ProductError {
    fn into_cli_error(self) -> anyhow::Error {
        tracing::debug!("Product command failed: {:?}", self);
        anyhow::anyhow!(self.user_message())
    }
}

impl IntoCliError for AccountError {
    fn into_cli_error(self) -> anyhow::Error {
        tracing::debug!("Account command failed: {:?}", self);
        anyhow::anyhow!(self.user_message())
    }
}
