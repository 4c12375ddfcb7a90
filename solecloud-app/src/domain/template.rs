use crate::domain::contact::ValidContact;

pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for contacting SoleCloud";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html_body: String,
}

/// The inquiry summary sent to the business operator.
pub fn notification(contact: &ValidContact) -> EmailContent {
    let subject = format!("New Contact Form Submission from {}", contact.name);
    let html_body = format!(
        "<h2>New Contact Form Submission</h2>\n\
        <p><strong>Name:</strong> {}</p>\n\
        <p><strong>Email:</strong> {}</p>\n\
        <p><strong>Phone:</strong> {}</p>\n\
        <p><strong>Project Type:</strong> {}</p>\n\
        <p><strong>Timeline:</strong> {}</p>\n\
        <p><strong>Message:</strong></p>\n\
        <p>{}</p>\n\
        <hr>\n\
        <p><small>This email was sent from the SoleCloud website contact form.</small></p>\n",
        contact.name,
        contact.email,
        contact.phone_or_placeholder(),
        contact.project_type_or_placeholder(),
        contact.timeline_or_placeholder(),
        contact.message,
    );
    EmailContent { subject, html_body }
}

/// The confirmation sent back to the submitter.
pub fn acknowledgement(contact: &ValidContact) -> EmailContent {
    let html_body = format!(
        "<h2>Thank you for reaching out!</h2>\n\
        <p>Hi {},</p>\n\
        <p>We've received your message and will get back to you as soon as possible.</p>\n\
        <p><strong>Your message:</strong></p>\n\
        <p>{}</p>\n\
        <br>\n\
        <p>Best regards,<br>The SoleCloud Team</p>\n\
        <hr>\n\
        <p><small>This is an automated confirmation email.</small></p>\n",
        contact.name, contact.message,
    );
    EmailContent {
        subject: ACKNOWLEDGEMENT_SUBJECT.to_string(),
        html_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ValidContact {
        ValidContact {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            message: "Hi".to_string(),
            phone: None,
            project_type: Some("Cloud Migration".to_string()),
            timeline: None,
        }
    }

    #[test]
    fn test_notification_content() {
        let content = notification(&contact());
        assert_eq!(content.subject, "New Contact Form Submission from Ann");
        assert!(content.html_body.contains("<strong>Name:</strong> Ann"));
        assert!(content.html_body.contains("<strong>Email:</strong> ann@x.com"));
        assert!(content.html_body.contains("<strong>Phone:</strong> Not provided"));
        assert!(
            content
                .html_body
                .contains("<strong>Project Type:</strong> Cloud Migration")
        );
        assert!(
            content
                .html_body
                .contains("<strong>Timeline:</strong> Not specified")
        );
        assert!(content.html_body.contains("<p>Hi</p>"));
    }

    #[test]
    fn test_acknowledgement_content() {
        let content = acknowledgement(&contact());
        assert_eq!(content.subject, "Thank you for contacting SoleCloud");
        assert!(content.html_body.contains("<p>Hi Ann,</p>"));
        assert!(content.html_body.contains("<p>Hi</p>"));
        assert!(!content.html_body.contains("Not provided"));
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let mut contact = contact();
        contact.message = "Budget < $5k & timeline > 2 weeks, \"ASAP\"\nThanks".to_string();

        let acknowledgement = acknowledgement(&contact);
        assert!(acknowledgement.html_body.contains(&contact.message));

        let notification = notification(&contact);
        assert!(notification.html_body.contains(&contact.message));
    }
}
