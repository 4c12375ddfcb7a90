use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

pub const PHONE_PLACEHOLDER: &str = "Not provided";
pub const UNSPECIFIED_PLACEHOLDER: &str = "Not specified";

/// A contact form submission as it arrives from the website.
/// Every field is optional at this stage, `validate` decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub timeline: Option<String>,
}

/// Accepts any JSON value as text. `null`, `false` and zero count as absent,
/// the same as an empty string.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name, email, and message are required")]
    MissingRequiredFields { missing: Vec<&'static str> },
}

/// A submission that carries all required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub timeline: Option<String>,
}

impl ContactSubmission {
    pub fn validate(self) -> Result<ValidContact, ValidationError> {
        let name = non_empty(self.name);
        let email = non_empty(self.email);
        let message = non_empty(self.message);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(ValidContact {
                name,
                email,
                message,
                phone: non_empty(self.phone),
                project_type: non_empty(self.project_type),
                timeline: non_empty(self.timeline),
            }),
            (name, email, message) => {
                let missing = [
                    ("name", name.is_none()),
                    ("email", email.is_none()),
                    ("message", message.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();
                Err(ValidationError::MissingRequiredFields { missing })
            }
        }
    }
}

impl ValidContact {
    pub fn phone_or_placeholder(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_PLACEHOLDER)
    }

    pub fn project_type_or_placeholder(&self) -> &str {
        self.project_type
            .as_deref()
            .unwrap_or(UNSPECIFIED_PLACEHOLDER)
    }

    pub fn timeline_or_placeholder(&self) -> &str {
        self.timeline.as_deref().unwrap_or(UNSPECIFIED_PLACEHOLDER)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_submission() {
        let contact = submission("Ann", "ann@x.com", "Hi").validate().unwrap();
        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.email, "ann@x.com");
        assert_eq!(contact.message, "Hi");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = ContactSubmission::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredFields {
                missing: vec!["name", "email", "message"]
            }
        );

        let err = submission("", "a@b.com", "Hi").validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredFields {
                missing: vec!["name"]
            }
        );
        assert_eq!(err.to_string(), "Name, email, and message are required");
    }

    #[test]
    fn test_email_format_is_not_checked() {
        assert!(submission("Ann", "not-an-address", "Hi").validate().is_ok());
    }

    #[test]
    fn test_placeholders() {
        let mut raw = submission("Ann", "ann@x.com", "Hi");
        raw.timeline = Some(String::new());
        let contact = raw.validate().unwrap();
        assert_eq!(contact.phone_or_placeholder(), "Not provided");
        assert_eq!(contact.project_type_or_placeholder(), "Not specified");
        assert_eq!(contact.timeline_or_placeholder(), "Not specified");

        let mut raw = submission("Ann", "ann@x.com", "Hi");
        raw.phone = Some("555-0100".to_string());
        raw.project_type = Some("Web".to_string());
        let contact = raw.validate().unwrap();
        assert_eq!(contact.phone_or_placeholder(), "555-0100");
        assert_eq!(contact.project_type_or_placeholder(), "Web");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let raw: ContactSubmission = serde_json::from_str(
            r#"{"name":"Ann","email":"ann@x.com","projectType":"Cloud","message":"Hi","phone":null}"#,
        )
        .unwrap();
        assert_eq!(raw.project_type.as_deref(), Some("Cloud"));
        assert_eq!(raw.phone, None);
        assert_eq!(raw.timeline, None);
    }

    #[test]
    fn test_deserialize_non_string_values() {
        let raw: ContactSubmission = serde_json::from_str(
            r#"{"name":"Ann","email":"ann@x.com","message":"Hi","phone":5550100,"projectType":true,"timeline":0}"#,
        )
        .unwrap();
        assert_eq!(raw.phone.as_deref(), Some("5550100"));
        assert_eq!(raw.project_type.as_deref(), Some("true"));
        assert_eq!(raw.timeline, None);

        let contact = raw.validate().unwrap();
        assert_eq!(contact.phone_or_placeholder(), "5550100");
        assert_eq!(contact.timeline_or_placeholder(), "Not specified");

        let raw: ContactSubmission =
            serde_json::from_str(r#"{"name":false,"email":"ann@x.com","message":"Hi"}"#).unwrap();
        assert!(raw.validate().is_err());
    }
}
