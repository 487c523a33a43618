use super::{api_config::ApiConfig, error::ConfigError, session_config::SessionConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            session: SessionConfig::from_env(),
        })
    }
}
