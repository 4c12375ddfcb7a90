use std::net::{IpAddr, SocketAddr};

use solecloud_app::{ApplicationSettings, DEFAULT_ENVIRONMENT, DEFAULT_OPERATOR_ADDRESS};
use solecloud_email_lettre::{SmtpConfigError, SmtpSettings};
use thiserror::Error;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error(transparent)]
    Smtp(#[from] SmtpConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub file_path: String,
    pub archive_pattern: String,
}

#[derive(Debug)]
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    pub application: ApplicationSettings,
    pub smtp: SmtpSettings,
    /// Rolling file output, only when both variables are set.
    pub log_file: Option<LogSettings>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = lookup("SOLECLOUD_HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string());
        let host = host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "SOLECLOUD_HTTP_HOST",
                value: host.clone(),
            })?;
        let port = match lookup("SOLECLOUD_HTTP_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "SOLECLOUD_HTTP_PORT",
                    value,
                })?,
            None => DEFAULT_HTTP_PORT,
        };

        let application = ApplicationSettings {
            operator_address: lookup("CONTACT_OPERATOR_EMAIL")
                .unwrap_or_else(|| DEFAULT_OPERATOR_ADDRESS.to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        };

        let log_file = match (lookup("LOG_FILE_PATH"), lookup("LOG_ARCHIVE_PATTERN")) {
            (Some(file_path), Some(archive_pattern)) => Some(LogSettings {
                file_path,
                archive_pattern,
            }),
            _ => None,
        };

        Ok(Self {
            http_addr: SocketAddr::new(host, port),
            application,
            smtp: SmtpSettings::from_lookup(lookup)?,
            log_file,
        })
    }
}
