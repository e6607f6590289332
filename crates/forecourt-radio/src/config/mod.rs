use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::enquiry::relay::{MissingRelaySettings, RelayCredentials, RelaySetup};

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub site: SiteConfig,
    pub relay: RelaySettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let audio_dir = env::var("SITE_AUDIO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public/audio"));

        let relay = RelaySettings {
            service_id: non_blank_var("EMAILJS_SERVICE_ID"),
            template_id: non_blank_var("EMAILJS_TEMPLATE_ID"),
            public_key: non_blank_var("EMAILJS_PUBLIC_KEY"),
            private_key: non_blank_var("EMAILJS_PRIVATE_KEY"),
            endpoint: non_blank_var("EMAILJS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            site: SiteConfig { audio_dir },
            relay,
        })
    }

    /// Resolve the relay settings, failing outright in production.
    ///
    /// Outside production an incomplete setup is tolerated: the site still serves pages and
    /// every enquiry reports the setup error to the visitor.
    pub fn relay_setup(&self) -> Result<RelaySetup, ConfigError> {
        match self.relay.setup() {
            RelaySetup::Incomplete(missing) if self.environment == AppEnvironment::Production => {
                Err(ConfigError::MissingRelay(missing))
            }
            setup => Ok(setup),
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Static assets served alongside the page.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub audio_dir: PathBuf,
}

/// Raw mail relay settings as read from the environment.
#[derive(Clone)]
pub struct RelaySettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub endpoint: String,
}

impl RelaySettings {
    pub fn credentials(&self) -> Result<RelayCredentials, MissingRelaySettings> {
        let credentials = RelayCredentials::new(
            self.service_id.clone().unwrap_or_default(),
            self.template_id.clone().unwrap_or_default(),
            self.public_key.clone().unwrap_or_default(),
        )?;

        Ok(match &self.private_key {
            Some(token) => credentials.with_access_token(token.clone()),
            None => credentials,
        })
    }

    pub fn setup(&self) -> RelaySetup {
        RelaySetup::from(self.credentials())
    }
}

impl fmt::Debug for RelaySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelaySettings")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &self.public_key.as_ref().map(|_| "<set>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<set>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingRelay(MissingRelaySettings),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingRelay(missing) => {
                write!(f, "{missing}; set them before running in production")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::MissingRelay(missing) => Some(missing),
        }
    }
}
