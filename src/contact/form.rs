use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBJECTS: [(&str, &str); 4] = [
    ("consulting", "Business Consulting"),
    ("development", "App Development"),
    ("vibecoding", "Vibecoding Audit"),
    ("other", "Other Inquiries"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub codename: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// What actually gets sent once the form checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub codename: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("signal frequency must be an email address")]
    InvalidEmail,
    #[error("unknown protocol: {0}")]
    UnknownSubject(String),
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

impl ContactForm {
    /// Updates the field an input's `name` attribute points at. Returns
    /// `false` for names the form does not know.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "codename" => &mut self.codename,
            "email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value;
        true
    }

    pub fn validate(&self) -> Result<ContactPayload, FormError> {
        let codename = self.codename.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if codename.is_empty() {
            return Err(FormError::Missing("codename"));
        }
        if email.is_empty() {
            return Err(FormError::Missing("signal frequency"));
        }
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(FormError::Missing("payload"));
        }

        let subject = match self.subject.as_str() {
            "" => None,
            known if SUBJECTS.iter().any(|(value, _)| *value == known) => Some(known.to_string()),
            other => return Err(FormError::UnknownSubject(other.to_string())),
        };

        Ok(ContactPayload {
            codename: codename.to_string(),
            email: email.to_string(),
            subject,
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmitStatus {
    pub fn button_disabled(&self) -> bool {
        matches!(self, SubmitStatus::Loading | SubmitStatus::Success)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "TRANSMIT DATA",
            SubmitStatus::Loading => "TRANSMITTING...",
            SubmitStatus::Success => "TRANSMISSION COMPLETE",
            SubmitStatus::Error(_) => "RETRY TRANSMISSION",
        }
    }
}
