use std::sync::Arc;

use crate::{
    ports::{email::EmailPort, mail_config::MailConfigPort},
    workflow::{
        contact::submit::{SubmitContactUseCase, SubmitContactUseCaseImpl},
        diagnostics::mail_status::{MailStatusUseCase, MailStatusUseCaseImpl},
    },
};

pub mod domain;
pub mod ports;
pub mod workflow;

pub const DEFAULT_OPERATOR_ADDRESS: &str = "contact@solecloud.io";
pub const DEFAULT_ENVIRONMENT: &str = "development";

pub struct Application {
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync + 'static>,
    pub mail_status_use_case: Arc<dyn MailStatusUseCase + Send + Sync + 'static>,
}

#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    /// Recipient of the inquiry notifications.
    pub operator_address: String,
    /// Runtime environment label, e.g. `production`.
    pub environment: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            operator_address: DEFAULT_OPERATOR_ADDRESS.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

pub fn build_application<
    E: EmailPort + Send + Sync + 'static,
    M: MailConfigPort + Send + Sync + 'static,
>(
    email_port: Arc<E>,
    mail_config: Arc<M>,
    settings: ApplicationSettings,
) -> Application {
    let submit_contact_use_case = Arc::new(SubmitContactUseCaseImpl::new(
        email_port,
        settings.operator_address,
    ));
    let mail_status_use_case = Arc::new(MailStatusUseCaseImpl::new(
        mail_config,
        settings.environment,
    ));

    Application {
        submit_contact_use_case,
        mail_status_use_case,
    }
}
