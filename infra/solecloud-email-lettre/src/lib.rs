use std::str::FromStr;

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use solecloud_app::ports::{
    email::{EmailPort, OutgoingEmail, SendEmailError},
    mail_config::MailConfigPort,
};

pub mod settings;

pub use settings::{SmtpConfigError, SmtpSettings};

/// SMTP relay client. The sender address is the mail username.
pub struct LettreEmailAdapter {
    transport: SmtpTransport,
    username: Option<String>,
    has_password: bool,
}

impl LettreEmailAdapter {
    pub fn new(settings: SmtpSettings) -> Result<Self, SmtpConfigError> {
        let relay = if settings.secure {
            SmtpTransport::relay(&settings.host)
        } else {
            SmtpTransport::starttls_relay(&settings.host)
        };
        let builder = relay
            .map_err(|e| SmtpConfigError::Relay {
                host: settings.host.clone(),
                reason: e.to_string(),
            })?
            .port(settings.port);

        let has_password = settings.password.is_some();
        let builder = match (&settings.username, settings.password) {
            (Some(user), Some(password)) => {
                builder.credentials(Credentials::new(user.clone(), password))
            }
            _ => {
                log::warn!("EMAIL_USER or EMAIL_PASSWORD not set, contact emails will fail");
                builder
            }
        };

        log::info!(
            "SMTP relay {}:{} ({})",
            settings.host,
            settings.port,
            if settings.secure { "tls" } else { "starttls" }
        );

        Ok(Self {
            transport: builder.build(),
            username: settings.username,
            has_password,
        })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, SendEmailError> {
        let (Some(from), true) = (&self.username, self.has_password) else {
            return Err(SendEmailError::MissingCredentials);
        };

        let mut builder = Message::builder()
            .from(parse_mailbox(from)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML);
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        builder
            .body(email.html_body.clone())
            .map_err(|e| SendEmailError::Build(e.to_string()))
    }
}

impl EmailPort for LettreEmailAdapter {
    fn send_email(&self, email: &OutgoingEmail) -> Result<(), SendEmailError> {
        let message = self.build_message(email)?;
        self.transport
            .send(&message)
            .map_err(|e| SendEmailError::Transport(e.to_string()))?;
        log::debug!("Sent email '{}'", email.subject);
        Ok(())
    }
}

impl MailConfigPort for LettreEmailAdapter {
    fn has_username(&self) -> bool {
        self.username.is_some()
    }

    fn has_password(&self) -> bool {
        self.has_password
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, SendEmailError> {
    Mailbox::from_str(address).map_err(|e| SendEmailError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
