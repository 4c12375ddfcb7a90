use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{
        contact::{ContactSubmission, ValidationError},
        template,
    },
    ports::email::{EmailPort, OutgoingEmail, SendEmailError},
};

pub trait SubmitContactUseCase {
    /// Validates the submission, then sends the operator notification followed by
    /// the submitter acknowledgement. The first failing send aborts the rest.
    fn submit(&self, submission: ContactSubmission) -> Result<(), SubmitContactError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Dispatch(#[from] SendEmailError),
}

pub struct SubmitContactUseCaseImpl<E: EmailPort> {
    email_port: Arc<E>,
    operator_address: String,
}

impl<E: EmailPort> SubmitContactUseCaseImpl<E> {
    pub fn new(email_port: Arc<E>, operator_address: String) -> Self {
        Self {
            email_port,
            operator_address,
        }
    }
}

impl<E: EmailPort> SubmitContactUseCase for SubmitContactUseCaseImpl<E> {
    fn submit(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        let contact = submission
            .validate()
            .inspect_err(|e| log::info!("Rejected contact submission: {:?}", e))?;

        let notification = template::notification(&contact);
        let notification = OutgoingEmail {
            to: self.operator_address.clone(),
            reply_to: Some(contact.email.clone()),
            subject: notification.subject,
            html_body: notification.html_body,
        };
        if let Err(e) = self.email_port.send_email(&notification) {
            log::error!(
                "Failed to send contact notification for {}: {}",
                contact.name,
                e
            );
            return Err(e.into());
        }

        let acknowledgement = template::acknowledgement(&contact);
        let acknowledgement = OutgoingEmail {
            to: contact.email.clone(),
            reply_to: None,
            subject: acknowledgement.subject,
            html_body: acknowledgement.html_body,
        };
        if let Err(e) = self.email_port.send_email(&acknowledgement) {
            // The notification already went out, nothing to undo.
            log::error!(
                "Failed to send contact acknowledgement to {}: {}",
                contact.name,
                e
            );
            return Err(e.into());
        }

        log::info!("Contact submission from {} dispatched", contact.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ports::email::MockEmailPort;

    use super::*;

    const OPERATOR: &str = "contact@solecloud.io";

    fn use_case(port: &MockEmailPort) -> SubmitContactUseCaseImpl<MockEmailPort> {
        SubmitContactUseCaseImpl::new(Arc::new(port.clone()), OPERATOR.to_string())
    }

    fn ann() -> ContactSubmission {
        ContactSubmission {
            name: Some("Ann".to_string()),
            email: Some("ann@x.com".to_string()),
            message: Some("Hi".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_submission_sends_notification_then_acknowledgement() {
        let port = MockEmailPort::default();
        assert_eq!(use_case(&port).submit(ann()), Ok(()));

        let sent = port.get_attempts();
        assert_eq!(sent.len(), 2);

        assert_eq!(sent[0].to, OPERATOR);
        assert_eq!(sent[0].reply_to.as_deref(), Some("ann@x.com"));
        assert!(sent[0].subject.contains("Ann"));
        assert!(sent[0].html_body.contains("Not provided"));
        assert!(sent[0].html_body.contains("Not specified"));

        assert_eq!(sent[1].to, "ann@x.com");
        assert_eq!(sent[1].reply_to, None);
        assert_eq!(sent[1].subject, "Thank you for contacting SoleCloud");
        assert!(sent[1].html_body.contains("Hi"));
    }

    #[test]
    fn test_invalid_submission_sends_nothing() {
        let cases = [
            ContactSubmission {
                name: Some(String::new()),
                ..ann()
            },
            ContactSubmission {
                email: None,
                ..ann()
            },
            ContactSubmission {
                message: Some(String::new()),
                ..ann()
            },
        ];
        for submission in cases {
            let port = MockEmailPort::default();
            assert!(matches!(
                use_case(&port).submit(submission),
                Err(SubmitContactError::Validation(..))
            ));
            assert!(port.get_attempts().is_empty());
        }
    }

    #[test]
    fn test_notification_failure_skips_acknowledgement() {
        let port = MockEmailPort::failing_on(&[0]);
        assert!(matches!(
            use_case(&port).submit(ann()),
            Err(SubmitContactError::Dispatch(SendEmailError::Transport(..)))
        ));
        let sent = port.get_attempts();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, OPERATOR);
    }

    #[test]
    fn test_acknowledgement_failure_fails_submission() {
        let port = MockEmailPort::failing_on(&[1]);
        assert!(matches!(
            use_case(&port).submit(ann()),
            Err(SubmitContactError::Dispatch(..))
        ));
        assert_eq!(port.get_attempts().len(), 2);
    }

    #[test]
    fn test_repeated_submission_sends_again() {
        let port = MockEmailPort::default();
        let use_case = use_case(&port);
        use_case.submit(ann()).unwrap();
        use_case.submit(ann()).unwrap();
        assert_eq!(port.get_attempts().len(), 4);
    }

    #[test]
    fn test_optional_fields_are_included() {
        let port = MockEmailPort::default();
        let submission = ContactSubmission {
            phone: Some("555-0100".to_string()),
            project_type: Some("Web Development".to_string()),
            timeline: Some("Q3".to_string()),
            ..ann()
        };
        use_case(&port).submit(submission).unwrap();

        let notification = &port.get_attempts()[0];
        assert!(notification.html_body.contains("555-0100"));
        assert!(notification.html_body.contains("Web Development"));
        assert!(notification.html_body.contains("Q3"));
        assert!(!notification.html_body.contains("Not provided"));
        assert!(!notification.html_body.contains("Not specified"));
    }

    #[test]
    fn test_acknowledgement_echoes_message_verbatim() {
        let port = MockEmailPort::default();
        let message = "Budget < $5k & timeline > 2 weeks, \"ASAP\"";
        let submission = ContactSubmission {
            message: Some(message.to_string()),
            ..ann()
        };
        use_case(&port).submit(submission).unwrap();

        let acknowledgement = &port.get_attempts()[1];
        assert_eq!(acknowledgement.to, "ann@x.com");
        assert!(acknowledgement.html_body.contains(message));
    }
}
