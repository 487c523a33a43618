use std::env;
use std::path::PathBuf;

/// Location of the file holding the signed-in user.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    /// SHOP_SESSION_FILE (default: "shop_session.json")
    pub fn from_env() -> Self {
        Self::from_value(env::var("SHOP_SESSION_FILE").ok())
    }

    fn from_value(file: Option<String>) -> Self {
        let file = file
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| "shop_session.json".to_string());
        Self {
            file: PathBuf::from(file),
        }
    }
}
