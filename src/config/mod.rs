//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, DirectoryConfig, HttpConfig, LogFormat, LoggingConfig,
    RegistrationConfig, SessionConfig,
};
