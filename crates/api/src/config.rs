use domain::services::FailureFeedback;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Minimum length of the cookie signing secret, in bytes.
pub const MIN_SECRET_KEY_LEN: usize = 32;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    /// Contact notification delivery
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Secret used to sign the flash cookie. No default: must be supplied.
    #[serde(default)]
    pub secret_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file location.
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Place the database file in the OS temp directory (read-only hosts).
    #[serde(default)]
    pub ephemeral: bool,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// The file the pool opens. With `ephemeral`, only the file name of
    /// `path` is kept and it is placed in the temp directory.
    pub fn resolved_path(&self) -> PathBuf {
        let configured = PathBuf::from(&self.path);
        if self.ephemeral {
            let file_name = configured
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default_database_path()));
            std::env::temp_dir().join(file_name)
        } else {
            configured
        }
    }

    pub fn pool_config(&self) -> persistence::db::DatabaseConfig {
        persistence::db::DatabaseConfig {
            path: self.resolved_path(),
            max_connections: self.max_connections,
            connect_timeout_secs: self.connect_timeout_secs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Send Strict-Transport-Security. Enable only behind HTTPS.
    #[serde(default)]
    pub hsts_enabled: bool,
}

/// Email delivery configuration for contact notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP submission host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP submission port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP login. Defaults to the owner address when empty.
    #[serde(default)]
    pub smtp_username: String,

    /// SMTP password or app token. Empty means dry-run: nothing is sent.
    #[serde(default)]
    pub smtp_password: String,

    /// Site owner's address: both sender and recipient of notifications.
    #[serde(default)]
    pub owner_address: String,

    /// Display name on the From header
    #[serde(default = "default_sender_name")]
    pub sender_name: String,

    /// SMTP session timeout in seconds
    #[serde(default = "default_smtp_timeout")]
    pub timeout_secs: u64,

    /// What the visitor sees when delivery fails
    #[serde(default)]
    pub failure_feedback: FailureFeedback,
}

impl EmailConfig {
    /// The delivery credential, if one is configured.
    pub fn credential(&self) -> Option<&str> {
        let password = self.smtp_password.trim();
        (!password.is_empty()).then_some(password)
    }

    pub fn username(&self) -> &str {
        if self.smtp_username.is_empty() {
            &self.owner_address
        } else {
            &self.smtp_username
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_request_timeout() -> u64 {
    60
}
fn default_database_path() -> String {
    "data/portfolio.db".to_string()
}
fn default_max_connections() -> u32 {
    5
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}
fn default_smtp_port() -> u16 {
    587 // STARTTLS submission port
}
fn default_sender_name() -> String {
    "Portfolio".to_string()
}
fn default_smtp_timeout() -> u64 {
    30
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with PORTFOLIO__ prefix
    ///
    /// `EMAIL_APP_PASSWORD` is accepted as a fallback for
    /// `PORTFOLIO__EMAIL__SMTP_PASSWORD`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Ok(password) = std::env::var("EMAIL_APP_PASSWORD") {
            builder = builder.set_default("email.smtp_password", password)?;
        }

        let config = builder
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("PORTFOLIO").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds the config from embedded defaults and overrides only, without
    /// touching config files or the environment.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 5000
            request_timeout_secs = 30
            secret_key = "test-secret-key-that-is-long-enough-for-signing"

            [database]
            path = "data/portfolio.db"
            ephemeral = false
            max_connections = 5
            connect_timeout_secs = 10

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []
            hsts_enabled = false

            [email]
            smtp_host = "smtp.example.com"
            smtp_port = 587
            smtp_password = ""
            owner_address = "owner@example.com"
            sender_name = "Portfolio"
            timeout_secs = 5
            failure_feedback = "report_success"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        // Validation is left to the caller so tests can build invalid configs.
        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.secret_key.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "PORTFOLIO__SERVER__SECRET_KEY environment variable must be set".to_string(),
            ));
        }

        if self.server.secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(ConfigValidationError::InvalidValue(format!(
                "server.secret_key must be at least {} bytes",
                MIN_SECRET_KEY_LEN
            )));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.socket_addr().is_err() {
            return Err(ConfigValidationError::InvalidValue(format!(
                "Invalid listen address {}:{}",
                self.server.host, self.server.port
            )));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "database.path".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if self.email.timeout_secs >= self.server.request_timeout_secs {
            return Err(ConfigValidationError::InvalidValue(format!(
                "email.timeout_secs ({}) must be lower than server.request_timeout_secs ({})",
                self.email.timeout_secs, self.server.request_timeout_secs
            )));
        }

        if !self.email.owner_address.contains('@') {
            return Err(ConfigValidationError::MissingRequired(
                "email.owner_address must be a valid email address".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
