use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

/// Outbound mail transport. Sending blocks until the relay accepted or rejected the message.
pub trait EmailPort {
    fn send_email(&self, email: &OutgoingEmail) -> Result<(), SendEmailError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendEmailError {
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("mail credentials are not configured")]
    MissingCredentials,
    #[error("failed to build email: {0}")]
    Build(String),
    #[error("failed to send email: {0}")]
    Transport(String),
}

/// Records every attempted send. Sends whose zero-based attempt index is in
/// `failing_attempts` fail with a transport error.
#[derive(Clone, Default)]
pub struct MockEmailPort {
    attempts: Arc<Mutex<Vec<OutgoingEmail>>>,
    failing_attempts: Vec<usize>,
}

#[allow(unused)]
impl MockEmailPort {
    pub fn failing_on(failing_attempts: &[usize]) -> Self {
        Self {
            attempts: Arc::default(),
            failing_attempts: failing_attempts.to_vec(),
        }
    }

    pub fn get_attempts(&self) -> Vec<OutgoingEmail> {
        self.attempts.lock().unwrap().clone()
    }
}

impl EmailPort for MockEmailPort {
    fn send_email(&self, email: &OutgoingEmail) -> Result<(), SendEmailError> {
        let mut attempts = self.attempts.lock().unwrap();
        let index = attempts.len();
        attempts.push(email.clone());
        if self.failing_attempts.contains(&index) {
            return Err(SendEmailError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}
