use std::fmt;

use thiserror::Error;

pub const DEFAULT_SMTP_HOST: &str = "smtp.mail.us-east-1.awsapps.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Debug, Error)]
pub enum SmtpConfigError {
    #[error("{key} must be a valid port number, got '{value}'")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be a boolean, got '{value}'")]
    InvalidFlag { key: &'static str, value: String },
    #[error("failed to create SMTP transport for {host}: {reason}")]
    Relay { host: String, reason: String },
}

/// Connection settings for the outbound relay. Credentials may be absent,
/// in which case every send fails with `MissingCredentials`.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// Implicit TLS when set, STARTTLS otherwise.
    pub secure: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SmtpSettings {
    pub fn from_env() -> Result<Self, SmtpConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SmtpConfigError> {
        let host = lookup("SMTP_HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());

        let port = match lookup("SMTP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| SmtpConfigError::InvalidPort {
                    key: "SMTP_PORT",
                    value,
                })?,
            None => DEFAULT_SMTP_PORT,
        };

        let secure = match lookup("SMTP_SECURE") {
            Some(value) => parse_flag(&value).ok_or(SmtpConfigError::InvalidFlag {
                key: "SMTP_SECURE",
                value,
            })?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            secure,
            username: lookup("EMAIL_USER").filter(|v| !v.is_empty()),
            password: lookup("EMAIL_PASSWORD").filter(|v| !v.is_empty()),
        })
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username.is_some())
            .field("password", &self.password.is_some())
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
