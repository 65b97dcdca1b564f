use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub directory: DirectoryConfig,
    pub session: SessionConfig,
    pub registration: RegistrationConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Identity provider endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Profile directory endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
}

/// Local session persistence settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub path: String,
}

/// Workflow policy settings
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    pub min_password_length: usize,
    /// Per-remote-call bound in seconds; absent means unbounded (the
    /// collaborators' own timeouts apply)
    pub call_timeout_secs: Option<u64>,
}

/// Outbound HTTP settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            directory: DirectoryConfig::default(),
            session: SessionConfig::default(),
            registration: RegistrationConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "https://identitytoolkit.googleapis.com".to_string(),
            api_key: "api-key-placeholder".to_string(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: ".academeet/session.json".to_string(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            call_timeout_secs: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
