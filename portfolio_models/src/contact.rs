use nutype::nutype;

use crate::email_address::{EmailAddress, EmailMessageId};

/// Minimum number of characters of a contact message.
pub const CONTACT_MESSAGE_MIN_CHARS: usize = 10;

/// A single field of a contact form exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldInput {
    /// The field was missing or `null`.
    #[default]
    Absent,
    Text(String),
    /// The field was present but not a string.
    NotText,
}

impl FieldInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::NotText => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::NotText => None,
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

/// Unvalidated contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmissionInput {
    pub name: FieldInput,
    pub email: FieldInput,
    pub company: FieldInput,
    pub message: FieldInput,
    pub deadline: FieldInput,
    pub budget: FieldInput,
}

/// A contact form submission that passed validation.
///
/// Empty optional fields are normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub company: Option<String>,
    pub message: ContactMessage,
    pub deadline: Option<String>,
    pub budget: Option<String>,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactName(String);

#[nutype(
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactMessage(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    RequiredField,
    InvalidFormat,
    TooShort,
    InvalidType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending input field.
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    /// Localized description shown to the submitter.
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub message_id: EmailMessageId,
}
