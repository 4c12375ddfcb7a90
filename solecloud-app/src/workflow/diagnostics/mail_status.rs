use std::sync::Arc;

use crate::ports::mail_config::MailConfigPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailStatus {
    pub email_user_set: bool,
    pub email_password_set: bool,
    pub environment: String,
}

pub trait MailStatusUseCase {
    fn status(&self) -> MailStatus;
}

pub struct MailStatusUseCaseImpl<M: MailConfigPort> {
    mail_config: Arc<M>,
    environment: String,
}

impl<M: MailConfigPort> MailStatusUseCaseImpl<M> {
    pub fn new(mail_config: Arc<M>, environment: String) -> Self {
        Self {
            mail_config,
            environment,
        }
    }
}

impl<M: MailConfigPort> MailStatusUseCase for MailStatusUseCaseImpl<M> {
    fn status(&self) -> MailStatus {
        MailStatus {
            email_user_set: self.mail_config.has_username(),
            email_password_set: self.mail_config.has_password(),
            environment: self.environment.clone(),
        }
    }
}
