pub mod api_config;
pub mod app_config;
pub mod error;
pub mod session_config;
