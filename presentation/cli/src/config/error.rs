use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.invalid_base_url: {0}")]
    InvalidBaseUrl(String),
    #[error("config.invalid_timeout: {0}")]
    InvalidTimeout(String),
}
